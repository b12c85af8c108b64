use crate::{
    error::EmotionError,
    provider::EmotionClassifier,
    types::{EmotionPair, EmotionScore, EmotionSource},
};

/// Pick dominant and secondary labels by descending score
///
/// Ties keep the classifier's order. Returns `None` for an empty list.
pub fn rank(mut scores: Vec<EmotionScore>) -> Option<EmotionPair> {
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut labels = scores.into_iter().map(|s| s.label);
    let dominant = labels.next()?;
    let secondary = labels
        .next()
        .unwrap_or_else(|| EmotionPair::SINGLE_LABEL_SECONDARY.to_owned());

    Some(EmotionPair {
        dominant,
        secondary,
        source: EmotionSource::Classifier,
    })
}

/// Classify the dream fragment, never failing
pub async fn resolve(classifier: Option<&dyn EmotionClassifier>, text: &str) -> EmotionPair {
    let Some(classifier) = classifier else {
        tracing::debug!("skipping emotion analysis, no classifier configured");
        return EmotionPair::fallback(EmotionSource::Unconfigured);
    };

    let pair = match classifier.classify(text).await {
        Ok(scores) => rank(scores).unwrap_or_else(|| {
            tracing::warn!(provider = classifier.name(), "classifier returned no labels");
            EmotionPair::fallback(EmotionSource::Unusable)
        }),
        Err(e) => {
            tracing::warn!(provider = classifier.name(), error = %e, "emotion analysis failed, using fallback");
            fallback_for(&e)
        }
    };

    tracing::debug!(dominant = %pair.dominant, secondary = %pair.secondary, source = ?pair.source, "emotions resolved");

    pair
}

fn fallback_for(error: &EmotionError) -> EmotionPair {
    if error.provider_answered() {
        EmotionPair::fallback(EmotionSource::Unusable)
    } else {
        EmotionPair::fallback(EmotionSource::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;

    struct Fixed(fn() -> crate::Result<Vec<EmotionScore>>);

    #[async_trait]
    impl EmotionClassifier for Fixed {
        async fn classify(&self, _text: &str) -> crate::Result<Vec<EmotionScore>> {
            (self.0)()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn score(label: &str, score: f64) -> EmotionScore {
        EmotionScore {
            label: label.to_owned(),
            score,
        }
    }

    fn labels(pair: &EmotionPair) -> (&str, &str) {
        (pair.dominant.as_str(), pair.secondary.as_str())
    }

    #[test]
    fn ranks_by_score() {
        let pair = rank(vec![score("sadness", 0.4), score("joy", 0.9), score("fear", 0.1)]).unwrap();
        assert_eq!(labels(&pair), ("joy", "sadness"));
        assert!(!pair.is_fallback());
    }

    #[test]
    fn single_label_gets_neutral_secondary() {
        let pair = rank(vec![score("fear", 0.7)]).unwrap();
        assert_eq!(labels(&pair), ("fear", "neutral"));
    }

    #[test]
    fn empty_list_has_no_ranking() {
        assert!(rank(Vec::new()).is_none());
    }

    #[test]
    fn ties_keep_classifier_order() {
        let pair = rank(vec![score("surprise", 0.5), score("anger", 0.5)]).unwrap();
        assert_eq!(labels(&pair), ("surprise", "anger"));
    }

    #[tokio::test]
    async fn unconfigured_classifier() {
        let pair = resolve(None, "I was flying over a city").await;
        assert_eq!(labels(&pair), ("mysterious", "contemplative"));
        assert_eq!(pair.source, EmotionSource::Unconfigured);
    }

    #[tokio::test]
    async fn classifier_output_is_ranked() {
        let classifier = Fixed(|| Ok(vec![score("joy", 0.9), score("sadness", 0.4)]));
        let pair = resolve(Some(&classifier), "text").await;
        assert_eq!(labels(&pair), ("joy", "sadness"));
    }

    #[tokio::test]
    async fn error_status_falls_back_to_neutral() {
        let classifier = Fixed(|| {
            Err(EmotionError::Status {
                status: 503,
                message: "model loading".to_owned(),
            })
        });
        let pair = resolve(Some(&classifier), "text").await;
        assert_eq!(labels(&pair), ("neutral", "contemplative"));
        assert_eq!(pair.source, EmotionSource::Unusable);
    }

    #[tokio::test]
    async fn malformed_body_falls_back_to_neutral() {
        let classifier = Fixed(|| Err(EmotionError::Malformed("{\"error\":1}".to_owned())));
        let pair = resolve(Some(&classifier), "text").await;
        assert_eq!(labels(&pair), ("neutral", "contemplative"));
    }

    #[tokio::test]
    async fn empty_ranking_falls_back_to_neutral() {
        let classifier = Fixed(|| Ok(Vec::new()));
        let pair = resolve(Some(&classifier), "text").await;
        assert_eq!(labels(&pair), ("neutral", "contemplative"));
    }

    #[tokio::test]
    async fn timeout_falls_back_to_mysterious() {
        let classifier = Fixed(|| Err(EmotionError::Timeout));
        let pair = resolve(Some(&classifier), "text").await;
        assert_eq!(labels(&pair), ("mysterious", "contemplative"));
        assert_eq!(pair.source, EmotionSource::Unreachable);
    }
}
