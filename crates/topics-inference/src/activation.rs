//! Output activations applied to raw model scores.

use topics_core::config::OutputActivation;

/// Apply `activation` to `scores` in place.
pub fn apply(activation: OutputActivation, scores: &mut [f32]) {
    match activation {
        OutputActivation::None => {}
        OutputActivation::Sigmoid => {
            for s in scores.iter_mut() {
                *s = 1.0 / (1.0 + (-*s).exp());
            }
        }
        OutputActivation::Softmax => {
            let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
            let mut sum = 0.0f32;
            for s in scores.iter_mut() {
                *s = (*s - max).exp();
                sum += *s;
            }
            if sum > 0.0 {
                for s in scores.iter_mut() {
                    *s /= sum;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn softmax_sums_to_one_and_keeps_order() {
        let mut scores = [2.0f32, 1.0, 0.1];
        apply(OutputActivation::Softmax, &mut scores);
        let sum: f32 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(scores[0] > scores[1] && scores[1] > scores[2]);
    }

    #[test]
    fn softmax_handles_large_logits() {
        let mut scores = [1000.0f32, 1000.0];
        apply(OutputActivation::Softmax, &mut scores);
        assert_eq!(scores, [0.5, 0.5]);
    }

    #[test]
    fn sigmoid_maps_zero_to_half() {
        let mut scores = [0.0f32, 50.0, -50.0];
        apply(OutputActivation::Sigmoid, &mut scores);
        assert_eq!(scores[0], 0.5);
        assert!(scores[1] > 0.999);
        assert!(scores[2] < 0.001);
    }

    #[test]
    fn none_leaves_scores_untouched() {
        let mut scores = [0.3f32, 0.7];
        apply(OutputActivation::None, &mut scores);
        assert_eq!(scores, [0.3, 0.7]);
    }
}
