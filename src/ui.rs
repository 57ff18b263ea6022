pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Momaid</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #fdf2f4;
      --bg-2: #f9d8e0;
      --ink: #322a2d;
      --accent: #d4567a;
      --accent-2: #4a5d74;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(74, 93, 116, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #fde8ec 60%, #f7f1f3 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 10px;
      font-size: 1.3rem;
    }

    .subtitle {
      margin: 0;
      color: #6b5f63;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(74, 93, 116, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b7d82;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .card {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(74, 93, 116, 0.08);
    }

    .progress-track {
      height: 12px;
      border-radius: 999px;
      background: rgba(74, 93, 116, 0.12);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      width: 0;
      border-radius: 999px;
      background: var(--accent);
      transition: width 400ms ease;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.secondary {
      background: var(--accent-2);
    }

    button.ghost {
      background: rgba(74, 93, 116, 0.1);
      color: var(--accent-2);
    }

    input, select {
      width: 100%;
      border: 1px solid rgba(74, 93, 116, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 0.95rem;
      font-family: inherit;
    }

    form {
      display: grid;
      gap: 10px;
    }

    .row {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 10px;
    }

    .tip-item {
      border-left: 4px solid var(--accent);
      background: #fdf7f8;
      border-radius: 12px;
      padding: 12px 14px;
      margin-bottom: 10px;
    }

    .tip-item.read {
      opacity: 0.55;
    }

    .tip-category {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--accent);
      margin-bottom: 4px;
    }

    .tip-actions {
      margin-top: 8px;
      display: flex;
      gap: 8px;
    }

    .tip-actions button {
      padding: 6px 12px;
      font-size: 0.8rem;
    }

    .list-item {
      border-bottom: 1px solid rgba(74, 93, 116, 0.1);
      padding: 10px 2px;
    }

    .list-item .meta {
      font-size: 0.85rem;
      color: #8b7d82;
    }

    .status {
      font-size: 0.95rem;
      color: #6b5f63;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none !important;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
    }

    .topbar {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
      flex-wrap: wrap;
    }

    .avatar {
      width: 44px;
      height: 44px;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      display: grid;
      place-items: center;
      font-weight: 600;
      font-size: 1.2rem;
    }
  </style>
</head>
<body>
  <main class="app">
    <section id="welcome">
      <header>
        <h1>Momaid</h1>
        <p class="subtitle">Track your pregnancy week by week: progress, tips, weight guidance, and nearby clinics.</p>
      </header>
      <div class="columns" style="margin-top:20px">
        <div class="card">
          <h2>Login</h2>
          <form id="login-form">
            <input id="login-email" type="email" placeholder="Email" required />
            <input id="login-password" type="password" placeholder="Password" required />
            <button type="submit">Login</button>
            <button type="button" class="ghost" id="show-reset">Forgot password?</button>
          </form>
        </div>
        <div class="card">
          <h2>Sign Up</h2>
          <form id="register-form">
            <input id="register-name" placeholder="Your name" required />
            <input id="register-email" type="email" placeholder="Email" required />
            <input id="register-password" type="password" placeholder="Password" required />
            <label class="subtitle" for="register-due">Due date</label>
            <input id="register-due" type="date" required />
            <button type="submit" class="secondary">Create account</button>
          </form>
        </div>
        <div class="card hidden" id="reset-card">
          <h2>Reset Password</h2>
          <form id="reset-form">
            <input id="reset-email" type="email" placeholder="Email" required />
            <input id="reset-password" type="password" placeholder="New password" required />
            <input id="reset-confirm" type="password" placeholder="Confirm new password" required />
            <button type="submit">Set new password</button>
          </form>
        </div>
      </div>
    </section>

    <section id="main" class="hidden">
      <div class="topbar">
        <div style="display:flex;align-items:center;gap:12px">
          <div class="avatar" id="user-avatar"></div>
          <div>
            <h1 id="user-name"></h1>
            <p class="subtitle" id="user-subtitle"></p>
          </div>
        </div>
        <button class="ghost" id="logout-btn">Logout</button>
      </div>

      <section class="panel" style="margin-top:18px">
        <div class="stat"><span class="label">Week</span><span class="value" id="stat-week">-</span></div>
        <div class="stat"><span class="label">Trimester</span><span class="value" id="stat-trimester">-</span></div>
        <div class="stat"><span class="label">Days left</span><span class="value" id="stat-days-left">-</span></div>
        <div class="stat"><span class="label">Upcoming visits</span><span class="value" id="stat-appointments">-</span></div>
      </section>

      <div class="card" style="margin-top:16px">
        <div class="topbar">
          <h2>Progress</h2>
          <span class="subtitle" id="progress-label"></span>
        </div>
        <div class="progress-track"><div class="progress-fill" id="progress-fill"></div></div>
        <p class="subtitle" id="development-line" style="margin-top:10px"></p>
      </div>

      <div class="columns" style="margin-top:16px">
        <div class="card">
          <div class="topbar">
            <h2>Tips for your week</h2>
            <select id="tip-filter">
              <option value="">All preferences</option>
              <option value="nutrition">Nutrition</option>
              <option value="health">Health</option>
              <option value="exercise">Exercise</option>
              <option value="planning">Planning</option>
            </select>
          </div>
          <div id="tips-container"></div>
          <p class="subtitle" id="tip-of-day"></p>
          <form id="search-form">
            <input id="search-input" placeholder="Search tips (e.g. heart, iron, yoga)" />
            <button type="submit" class="ghost">Search</button>
          </form>
          <div id="search-results"></div>
        </div>

        <div class="card">
          <h2>Weight guidance</h2>
          <form id="weight-form">
            <div class="row">
              <input id="weight-kg" type="number" step="0.1" min="1" placeholder="Pre-pregnancy weight (kg)" required />
              <input id="height-cm" type="number" step="0.1" min="1" placeholder="Height (cm)" required />
            </div>
            <button type="submit" class="secondary">Calculate</button>
          </form>
          <p class="subtitle" id="weight-result"></p>

          <h2 style="margin-top:18px">Find a clinic</h2>
          <form id="clinic-form">
            <input id="clinic-location" placeholder="City or address" required />
            <button type="submit">Search clinics</button>
          </form>
          <div id="clinics-container"></div>
        </div>
      </div>

      <div class="columns" style="margin-top:16px">
        <div class="card">
          <h2>Appointments</h2>
          <form id="appointment-form">
            <div class="row">
              <input id="appointment-date" type="date" required />
              <input id="appointment-time" placeholder="Time (e.g. 2:00 PM)" required />
            </div>
            <input id="appointment-desc" placeholder="Description" required />
            <input id="appointment-provider" placeholder="Provider (optional)" />
            <button type="submit" class="ghost">Add appointment</button>
          </form>
          <div id="appointments-list"></div>
        </div>
        <div class="card">
          <h2>Notes</h2>
          <form id="note-form">
            <input id="note-title" placeholder="Title" required />
            <input id="note-content" placeholder="Note" required />
            <button type="submit" class="ghost">Add note</button>
          </form>
          <div id="notes-list"></div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let currentEmail = localStorage.getItem('momaidEmail');
    let currentWeek = 0;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      if (message) {
        setTimeout(() => { statusEl.textContent = ''; statusEl.dataset.type = ''; }, 4000);
      }
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const post = (path, body) => api(path, {
      method: 'POST',
      headers: { 'content-type': 'application/json' },
      body: JSON.stringify(body)
    });

    const userPath = (suffix) => `/api/users/${encodeURIComponent(currentEmail)}${suffix}`;

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const showMain = (show) => {
      document.getElementById('welcome').classList.toggle('hidden', show);
      document.getElementById('main').classList.toggle('hidden', !show);
    };

    const renderTips = (containerId, tips, withActions) => {
      const container = document.getElementById(containerId);
      if (!tips.length) {
        container.innerHTML = '<p class="subtitle">No tips found.</p>';
        return;
      }
      container.innerHTML = tips.map((tip) => `
        <div class="tip-item">
          <div class="tip-category">${escapeHtml(tip.category)}</div>
          <div>${escapeHtml(tip.tip)}</div>
          ${withActions ? `
            <div class="tip-actions">
              <button class="ghost" data-action="read">Mark read</button>
              <button class="ghost" data-action="save">Save to notes</button>
            </div>` : ''}
        </div>
      `).join('');

      if (withActions) {
        container.querySelectorAll('.tip-item').forEach((item, index) => {
          item.querySelectorAll('button').forEach((button) => {
            button.addEventListener('click', () => {
              const tip = tips[index];
              const action = button.dataset.action;
              const request = action === 'read'
                ? post(userPath('/tips/read'), { tip: tip.tip })
                : post(userPath('/tips/save'), { tip: tip.tip, category: tip.category });
              request.then(() => {
                if (action === 'read') { item.classList.add('read'); }
                else { loadNotes(); }
                setStatus(action === 'read' ? 'Tip marked as read' : 'Tip saved to your notes!', 'ok');
              }).catch((err) => setStatus(err.message, 'error'));
            });
          });
        });
      }
    };

    const loadDashboard = async () => {
      const dash = await api(userPath('/dashboard'));
      const { user, progress, development } = dash;
      document.getElementById('user-avatar').textContent = user.avatar;
      document.getElementById('user-name').textContent = user.name;
      document.getElementById('user-subtitle').textContent =
        `${progress.weeks} weeks pregnant - due ${progress.due_date}`;
      document.getElementById('stat-week').textContent = `${progress.weeks}w ${progress.days}d`;
      document.getElementById('stat-trimester').textContent = progress.trimester;
      document.getElementById('stat-days-left').textContent = progress.days_remaining;
      document.getElementById('stat-appointments').textContent = dash.upcoming_appointments;
      document.getElementById('progress-fill').style.width = `${progress.percentage}%`;
      document.getElementById('progress-label').textContent = `${Math.round(progress.percentage)}% of 40 weeks`;
      document.getElementById('development-line').textContent =
        `Baby is about the size of a ${development.size.toLowerCase()} (${development.length}): ${development.development}`;
      currentWeek = progress.weeks;
    };

    const loadTips = async (categoryOverride) => {
      const params = categoryOverride ? `?categories=${encodeURIComponent(categoryOverride)}` : '';
      const tips = await api(userPath(`/tips${params}`));
      renderTips('tips-container', tips, true);
      const daily = await api('/api/tips/daily');
      document.getElementById('tip-of-day').textContent = `Tip of the day (${daily.category}): ${daily.tip}`;
    };

    const loadAppointments = async () => {
      const appointments = await api(userPath('/appointments'));
      document.getElementById('appointments-list').innerHTML = appointments.length
        ? appointments.map((a) => `
            <div class="list-item">
              <div>${escapeHtml(a.description)}</div>
              <div class="meta">${a.date} at ${escapeHtml(a.time)} - ${escapeHtml(a.provider)}</div>
            </div>`).join('')
        : '<p class="subtitle">No appointments scheduled.</p>';
    };

    const loadNotes = async () => {
      const notes = await api(userPath('/notes'));
      document.getElementById('notes-list').innerHTML = notes.length
        ? notes.map((n) => `
            <div class="list-item">
              <div>${escapeHtml(n.title)}</div>
              <div class="meta">${n.date} - ${escapeHtml(n.content)}</div>
            </div>`).join('')
        : '<p class="subtitle">No notes yet.</p>';
    };

    const refresh = async () => {
      await loadDashboard();
      await Promise.all([loadTips(), loadAppointments(), loadNotes()]);
    };

    const enter = async () => {
      showMain(true);
      try {
        await refresh();
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('login-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/login', {
        email: document.getElementById('login-email').value,
        password: document.getElementById('login-password').value
      }).then((user) => {
        currentEmail = user.email;
        localStorage.setItem('momaidEmail', currentEmail);
        setStatus('Welcome back!', 'ok');
        enter();
      }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('register-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/register', {
        name: document.getElementById('register-name').value,
        email: document.getElementById('register-email').value,
        password: document.getElementById('register-password').value,
        due_date: document.getElementById('register-due').value
      }).then((user) => {
        currentEmail = user.email;
        localStorage.setItem('momaidEmail', currentEmail);
        setStatus('Account created successfully! Welcome to Momaid!', 'ok');
        enter();
      }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('show-reset').addEventListener('click', () => {
      document.getElementById('reset-card').classList.toggle('hidden');
    });

    document.getElementById('reset-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post('/api/password/reset', {
        email: document.getElementById('reset-email').value,
        new_password: document.getElementById('reset-password').value,
        confirm_password: document.getElementById('reset-confirm').value
      }).then((body) => setStatus(body.message, 'ok'))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('logout-btn').addEventListener('click', () => {
      currentEmail = null;
      localStorage.removeItem('momaidEmail');
      showMain(false);
      setStatus('Logged out successfully', 'ok');
    });

    document.getElementById('tip-filter').addEventListener('change', (event) => {
      loadTips(event.target.value).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('search-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const q = document.getElementById('search-input').value.trim();
      if (!q) { return; }
      api(`/api/tips/search?q=${encodeURIComponent(q)}`)
        .then((tips) => renderTips('search-results', tips, false))
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('weight-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const weightKg = document.getElementById('weight-kg').value;
      const heightCm = document.getElementById('height-cm').value;
      api(`/api/weight?weight_kg=${weightKg}&height_cm=${heightCm}&week=${currentWeek}`)
        .then((rec) => {
          document.getElementById('weight-result').textContent =
            `BMI ${rec.bmi}: aim for ${rec.total_recommended.min}-${rec.total_recommended.max} kg total, about ${rec.expected_by_now} kg by now.`;
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('clinic-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const location = document.getElementById('clinic-location').value;
      const container = document.getElementById('clinics-container');
      container.innerHTML = '<p class="subtitle">Searching for clinics...</p>';
      api(`/api/clinics?location=${encodeURIComponent(location)}`)
        .then((clinics) => {
          container.innerHTML = clinics.length
            ? clinics.map((clinic) => `
                <div class="list-item">
                  <div>${escapeHtml(clinic.name)} ${clinic.distance_km !== null ? `(${clinic.distance_km} km)` : '(Nearby)'}</div>
                  <div class="meta">${escapeHtml(clinic.address)} - ${escapeHtml(clinic.phone)}</div>
                  <div class="meta">${escapeHtml(clinic.hours)}</div>
                </div>`).join('')
            : '<p class="subtitle">No clinics found in this area.</p>';
        })
        .catch((err) => {
          container.innerHTML = `<p class="subtitle">Error finding clinics: ${escapeHtml(err.message)}</p>`;
        });
    });

    document.getElementById('appointment-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post(userPath('/appointments'), {
        date: document.getElementById('appointment-date').value,
        time: document.getElementById('appointment-time').value,
        description: document.getElementById('appointment-desc').value,
        provider: document.getElementById('appointment-provider').value || null
      }).then(() => {
        setStatus('Appointment added successfully!', 'ok');
        event.target.reset();
        loadAppointments();
        loadDashboard();
      }).catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('note-form').addEventListener('submit', (event) => {
      event.preventDefault();
      post(userPath('/notes'), {
        title: document.getElementById('note-title').value,
        content: document.getElementById('note-content').value
      }).then(() => {
        setStatus('Note added successfully!', 'ok');
        event.target.reset();
        loadNotes();
      }).catch((err) => setStatus(err.message, 'error'));
    });

    if (currentEmail) {
      enter();
    }
  </script>
</body>
</html>
"#;
