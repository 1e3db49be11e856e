use super::prelude::*;

/// Closes a tour and snapshots it as an immutable previous tour, the
/// anchor for feedback collection and the performance review.
pub fn complete_tour<R>(
    repo: &R,
    org: &Organization,
    tour_id: &str,
    total_travelers: u32,
) -> Result<PreviousTour>
where
    R: TourRepo + PreviousTourRepo + GuideRepo,
{
    let mut tour = repo.get_tour(tour_id)?;
    super::authorize_org_owns_tour(org, &tour)?;
    if tour.status != TourStatus::Current {
        return Err(Error::TourNotCurrent);
    }
    let Some(guide_id) = tour.guide_id.clone() else {
        return Err(Error::GuideNotAssigned);
    };
    // Fails early if the guide profile has vanished in the meantime.
    let guide = repo.get_guide(guide_id.as_str())?;

    tour.status = TourStatus::Completed;
    repo.update_tour(&tour)?;

    let previous_tour = PreviousTour {
        id: Id::new(),
        organization_id: org.id.clone(),
        guide_id: guide.id,
        tour_name: tour.name.clone(),
        tour_location: tour.location.clone(),
        tour_date: tour.date,
        completed_at: Timestamp::now(),
        avg_feedback_rating: None,
        total_travelers,
    };
    repo.create_previous_tour(&previous_tour)?;
    log::info!(
        "Completed tour {} as previous tour {}",
        tour.id,
        previous_tour.id
    );
    Ok(previous_tour)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    #[test]
    fn complete_assigned_tour() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let tour = fixtures::tour_with_guide(&db, &org, &guide);
        let previous = complete_tour(&db, &org, tour.id.as_str(), 9).unwrap();
        assert_eq!(previous.guide_id, guide.id);
        assert_eq!(previous.tour_name, tour.name);
        assert_eq!(previous.total_travelers, 9);
        assert!(previous.avg_feedback_rating.is_none());
        assert_eq!(
            db.get_tour(tour.id.as_str()).unwrap().status,
            TourStatus::Completed
        );
    }

    #[test]
    fn tour_without_guide_cannot_be_completed() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let tour = fixtures::tour(&db, &org);
        assert!(matches!(
            complete_tour(&db, &org, tour.id.as_str(), 5),
            Err(Error::GuideNotAssigned)
        ));
    }

    #[test]
    fn completing_twice_fails() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let tour = fixtures::tour_with_guide(&db, &org, &guide);
        assert!(complete_tour(&db, &org, tour.id.as_str(), 9).is_ok());
        assert!(matches!(
            complete_tour(&db, &org, tour.id.as_str(), 9),
            Err(Error::TourNotCurrent)
        ));
    }
}
