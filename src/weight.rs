use crate::models::{GainRange, WeightRecommendation};
use crate::progress::FULL_TERM_WEEKS;

/// Recommended total gain and the pro-rated expectation for the current
/// week, from pre-pregnancy weight and height. Inputs are assumed positive;
/// the HTTP layer rejects anything else before calling in.
pub fn recommend_weight_gain(
    pre_pregnancy_weight_kg: f64,
    height_cm: f64,
    current_week: u32,
) -> WeightRecommendation {
    let height_m = height_cm / 100.0;
    let bmi = pre_pregnancy_weight_kg / (height_m * height_m);

    // The bucket is chosen on the unrounded BMI; only the reported value
    // is rounded.
    let total_recommended = gain_range_for_bmi(bmi);
    let midpoint = (total_recommended.min + total_recommended.max) / 2.0;
    let expected = midpoint * (f64::from(current_week) / f64::from(FULL_TERM_WEEKS));

    WeightRecommendation {
        bmi: round_to_tenth(bmi),
        total_recommended,
        expected_by_now: round_to_tenth(expected),
    }
}

fn gain_range_for_bmi(bmi: f64) -> GainRange {
    if bmi < 18.5 {
        GainRange { min: 12.5, max: 18.0 }
    } else if bmi < 25.0 {
        GainRange { min: 11.5, max: 16.0 }
    } else if bmi < 30.0 {
        GainRange { min: 7.0, max: 11.5 }
    } else {
        GainRange { min: 5.0, max: 9.0 }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_bmi_at_midpregnancy() {
        let rec = recommend_weight_gain(70.0, 170.0, 20);
        assert_eq!(rec.bmi, 24.2);
        assert_eq!(rec.total_recommended, GainRange { min: 11.5, max: 16.0 });
        assert_eq!(rec.expected_by_now, 6.9);
    }

    #[test]
    fn underweight_bucket() {
        let rec = recommend_weight_gain(45.0, 170.0, 40);
        assert_eq!(rec.total_recommended, GainRange { min: 12.5, max: 18.0 });
        assert_eq!(rec.expected_by_now, 15.3);
    }

    #[test]
    fn overweight_and_obese_buckets() {
        let overweight = recommend_weight_gain(80.0, 170.0, 10);
        assert_eq!(overweight.total_recommended, GainRange { min: 7.0, max: 11.5 });

        let obese = recommend_weight_gain(95.0, 170.0, 10);
        assert_eq!(obese.total_recommended, GainRange { min: 5.0, max: 9.0 });
    }

    #[test]
    fn bucket_uses_unrounded_bmi() {
        // 72.2 kg at 170 cm is 24.98 => reported as 25.0 but still in the
        // 18.5..25 bucket.
        let rec = recommend_weight_gain(72.2, 170.0, 20);
        assert_eq!(rec.bmi, 25.0);
        assert_eq!(rec.total_recommended, GainRange { min: 11.5, max: 16.0 });
    }

    #[test]
    fn week_zero_expects_no_gain() {
        let rec = recommend_weight_gain(70.0, 170.0, 0);
        assert_eq!(rec.expected_by_now, 0.0);
    }
}
