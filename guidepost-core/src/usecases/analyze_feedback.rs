use super::prelude::*;
use crate::gateways::feedback_analysis::{
    AnalysisRequest, FeedbackAnalysis, FeedbackAnalysisGateway, InlineImage,
};

/// Runs the generative-model analysis over all collected feedback of a
/// previous tour. Uploaded feedback documents arrive as extracted text
/// and inline images.
///
/// The outbound call is a single blocking request. A failed or
/// unparseable analysis surfaces as an error for this request only and
/// is never retried here; the caller re-triggers it explicitly.
pub fn analyze_previous_tour_feedback<R, G>(
    repo: &R,
    gateway: &G,
    org: &Organization,
    previous_tour_id: &str,
    extra_texts: Vec<String>,
    images: Vec<InlineImage>,
) -> Result<FeedbackAnalysis>
where
    R: PreviousTourRepo + FeedbackRepo,
    G: FeedbackAnalysisGateway + ?Sized,
{
    let previous_tour = repo.get_previous_tour(previous_tour_id)?;
    super::authorize_org_owns_previous_tour(org, &previous_tour)?;
    let mut texts: Vec<_> = repo
        .feedback_of_previous_tour(previous_tour.id.as_str())?
        .into_iter()
        .map(|f| f.text)
        .collect();
    texts.extend(
        extra_texts
            .into_iter()
            .filter(|t| !t.trim().is_empty()),
    );
    let request = AnalysisRequest { texts, images };
    if request.is_empty() {
        return Err(Error::NothingToAnalyze);
    }
    log::debug!(
        "Analyzing {} feedback text(s) and {} image(s) for previous tour {}",
        request.texts.len(),
        request.images.len(),
        previous_tour.id
    );
    Ok(gateway.analyze(&request)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};
    use crate::gateways::feedback_analysis::AnalysisError;
    use std::cell::Cell;

    struct FakeGateway {
        calls: Cell<usize>,
        fail: bool,
    }

    impl FakeGateway {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    impl FeedbackAnalysisGateway for FakeGateway {
        fn analyze(&self, request: &AnalysisRequest) -> std::result::Result<FeedbackAnalysis, AnalysisError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(AnalysisError::MalformedResponse(anyhow::anyhow!(
                    "not json"
                )));
            }
            Ok(FeedbackAnalysis {
                summary: format!("{} texts analyzed", request.texts.len()),
                sentiment_score: SentimentScore::clamped(80),
                strengths: vec!["a".into(), "b".into(), "c".into()],
                improvements: "".into(),
                red_flags: false,
            })
        }
    }

    #[test]
    fn collects_stored_feedback_texts() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let traveler = fixtures::traveler(&db, "traveler@example.com");
        super::super::add_feedback(
            &db,
            &traveler,
            previous.id.as_str(),
            super::super::NewFeedback {
                rating: 5,
                text: "wonderful".into(),
            },
        )
        .unwrap();
        let gateway = FakeGateway::new(false);
        let analysis = analyze_previous_tour_feedback(
            &db,
            &gateway,
            &org,
            previous.id.as_str(),
            vec!["extracted from pdf".into()],
            vec![],
        )
        .unwrap();
        assert_eq!(analysis.summary, "2 texts analyzed");
        assert_eq!(gateway.calls.get(), 1);
    }

    #[test]
    fn nothing_to_analyze_short_circuits() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let gateway = FakeGateway::new(false);
        assert!(matches!(
            analyze_previous_tour_feedback(
                &db,
                &gateway,
                &org,
                previous.id.as_str(),
                vec![],
                vec![],
            ),
            Err(Error::NothingToAnalyze)
        ));
        assert_eq!(gateway.calls.get(), 0);
    }

    #[test]
    fn gateway_failure_is_terminal_not_retried() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let gateway = FakeGateway::new(true);
        assert!(matches!(
            analyze_previous_tour_feedback(
                &db,
                &gateway,
                &org,
                previous.id.as_str(),
                vec!["some text".into()],
                vec![],
            ),
            Err(Error::Analysis(_))
        ));
        assert_eq!(gateway.calls.get(), 1);
    }
}
