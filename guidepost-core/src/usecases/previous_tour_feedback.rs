use super::prelude::*;
use crate::rating::Rated;

#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub rating: i64,
    pub text: String,
}

/// Stores traveler feedback on a completed tour and recomputes the
/// previous tour's average feedback rating.
pub fn add_feedback<R>(
    repo: &R,
    author: &User,
    previous_tour_id: &str,
    f: NewFeedback,
) -> Result<PreviousTourFeedback>
where
    R: FeedbackRepo + PreviousTourRepo,
{
    if f.text.trim().is_empty() {
        return Err(Error::EmptyFeedback);
    }
    if !(1..=5).contains(&f.rating) {
        return Err(Error::RatingValue);
    }
    let rating = StarRating::new(f.rating as f64);
    let previous_tour = repo.get_previous_tour(previous_tour_id)?;
    let feedback = PreviousTourFeedback {
        id: Id::new(),
        previous_tour_id: previous_tour.id.clone(),
        author_email: author.email.clone(),
        rating,
        text: f.text,
        created_at: Timestamp::now(),
    };
    repo.create_feedback(&feedback)?;
    recompute_feedback_avg(repo, previous_tour)?;
    Ok(feedback)
}

/// Authors may retract their own feedback; admins may remove any.
/// The previous tour's average drops back to `None` once the last
/// entry is gone.
pub fn delete_feedback<R>(repo: &R, caller: &User, feedback_id: &str) -> Result<()>
where
    R: FeedbackRepo + PreviousTourRepo,
{
    let feedback = repo.get_feedback(feedback_id)?;
    if feedback.author_email != caller.email && caller.role != Role::Admin {
        return Err(Error::Forbidden);
    }
    let previous_tour = repo.get_previous_tour(feedback.previous_tour_id.as_str())?;
    repo.delete_feedback(feedback_id)?;
    recompute_feedback_avg(repo, previous_tour)?;
    Ok(())
}

fn recompute_feedback_avg<R>(repo: &R, mut previous_tour: PreviousTour) -> Result<()>
where
    R: FeedbackRepo + PreviousTourRepo,
{
    let feedback = repo.feedback_of_previous_tour(previous_tour.id.as_str())?;
    previous_tour.avg_feedback_rating = previous_tour.avg_rating(&feedback);
    repo.update_previous_tour(&previous_tour)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    fn feedback(rating: i64) -> NewFeedback {
        NewFeedback {
            rating,
            text: "lovely walk".into(),
        }
    }

    #[test]
    fn avg_follows_inserts_and_deletes() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let traveler = fixtures::traveler(&db, "traveler@example.com");

        let first = add_feedback(&db, &traveler, previous.id.as_str(), feedback(5)).unwrap();
        assert_eq!(
            db.get_previous_tour(previous.id.as_str())
                .unwrap()
                .avg_feedback_rating,
            Some(5.0.into())
        );

        let other = fixtures::traveler(&db, "other@example.com");
        let second = add_feedback(&db, &other, previous.id.as_str(), feedback(4)).unwrap();
        assert_eq!(
            db.get_previous_tour(previous.id.as_str())
                .unwrap()
                .avg_feedback_rating,
            Some(4.5.into())
        );

        delete_feedback(&db, &other, second.id.as_str()).unwrap();
        assert_eq!(
            db.get_previous_tour(previous.id.as_str())
                .unwrap()
                .avg_feedback_rating,
            Some(5.0.into())
        );

        delete_feedback(&db, &traveler, first.id.as_str()).unwrap();
        assert_eq!(
            db.get_previous_tour(previous.id.as_str())
                .unwrap()
                .avg_feedback_rating,
            None
        );
    }

    #[test]
    fn rating_must_be_a_whole_star_in_range() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let traveler = fixtures::traveler(&db, "traveler@example.com");
        assert!(matches!(
            add_feedback(&db, &traveler, previous.id.as_str(), feedback(0)),
            Err(Error::RatingValue)
        ));
        assert!(matches!(
            add_feedback(&db, &traveler, previous.id.as_str(), feedback(6)),
            Err(Error::RatingValue)
        ));
    }

    #[test]
    fn only_the_author_or_an_admin_may_delete() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let previous = fixtures::previous_tour(&db, &org, &guide, "p");
        let traveler = fixtures::traveler(&db, "traveler@example.com");
        let stranger = fixtures::traveler(&db, "stranger@example.com");
        let entry = add_feedback(&db, &traveler, previous.id.as_str(), feedback(4)).unwrap();
        assert!(matches!(
            delete_feedback(&db, &stranger, entry.id.as_str()),
            Err(Error::Forbidden)
        ));
        let admin = fixtures::admin(&db, "admin@example.com");
        assert!(delete_feedback(&db, &admin, entry.id.as_str()).is_ok());
    }
}
