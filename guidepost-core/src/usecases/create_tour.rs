use super::prelude::*;
use crate::util::{prepare_tag_list, validate::Validate};

#[derive(Debug, Clone)]
pub struct NewItineraryStop {
    pub sequence: u16,
    pub title: String,
    pub location: String,
    pub duration_minutes: u32,
    pub description: String,
    pub time: String,
}

#[derive(Debug, Clone)]
pub struct NewTour {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub location: String,
    pub date: Timestamp,
    pub itinerary: Vec<NewItineraryStop>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub max_group_size: u32,
    pub inclusions: Vec<String>,
}

pub fn create_tour<R: TourRepo>(repo: &R, org: &Organization, t: NewTour) -> Result<Tour> {
    let tour = prepare_tour(Id::new(), org.id.clone(), None, TourStatus::default(), t)?;
    repo.create_tour(&tour)?;
    log::info!("Created tour {} for organization {}", tour.id, org.id);
    Ok(tour)
}

pub fn update_tour<R: TourRepo>(
    repo: &R,
    org: &Organization,
    tour_id: &str,
    t: NewTour,
) -> Result<Tour> {
    let old = repo.get_tour(tour_id)?;
    super::authorize_org_owns_tour(org, &old)?;
    let updated = prepare_tour(old.id, old.organization_id, old.guide_id, old.status, t)?;
    repo.update_tour(&updated)?;
    Ok(updated)
}

/// Assigns a guide to a bookable tour owned by the calling organization.
pub fn assign_guide<R>(repo: &R, org: &Organization, tour_id: &str, guide_id: &str) -> Result<Tour>
where
    R: TourRepo + GuideRepo,
{
    let mut tour = repo.get_tour(tour_id)?;
    super::authorize_org_owns_tour(org, &tour)?;
    if !tour.status.is_bookable() {
        return Err(Error::TourNotCurrent);
    }
    let guide = repo.get_guide(guide_id)?;
    tour.guide_id = Some(guide.id);
    repo.update_tour(&tour)?;
    Ok(tour)
}

fn prepare_tour(
    id: Id,
    organization_id: Id,
    guide_id: Option<Id>,
    status: TourStatus,
    t: NewTour,
) -> Result<Tour> {
    let NewTour {
        name,
        description,
        price,
        location,
        date,
        itinerary,
        tags,
        languages,
        max_group_size,
        inclusions,
    } = t;
    let mut itinerary: Vec<_> = itinerary
        .into_iter()
        .map(|stop| {
            let NewItineraryStop {
                sequence,
                title,
                location,
                duration_minutes,
                description,
                time,
            } = stop;
            ItineraryStop {
                sequence,
                title,
                location,
                duration_minutes,
                description,
                time,
            }
        })
        .collect();
    itinerary.sort_by_key(|stop| stop.sequence);
    let tour = Tour {
        id,
        organization_id,
        guide_id,
        name,
        description,
        price,
        location,
        date,
        status,
        itinerary,
        tags: prepare_tag_list(tags.iter().map(String::as_str)),
        languages,
        max_group_size,
        inclusions,
    };
    tour.validate()?;
    Ok(tour)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures, super::tests::MockDb, *};

    fn new_tour() -> NewTour {
        NewTour {
            name: "Old Town Walk".into(),
            description: "Three hours through the historic center".into(),
            price: 2_500,
            location: "Lisbon".into(),
            date: Timestamp::from_secs(1_900_000_000),
            itinerary: vec![],
            tags: vec!["#History".into(), "walking".into()],
            languages: vec!["en".into(), "pt".into()],
            max_group_size: 12,
            inclusions: vec!["Museum tickets".into()],
        }
    }

    #[test]
    fn create_tour_normalizes_tags() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let tour = create_tour(&db, &org, new_tour()).unwrap();
        assert_eq!(tour.tags, vec!["history", "walking"]);
        assert_eq!(tour.status, TourStatus::Current);
        assert!(tour.guide_id.is_none());
    }

    #[test]
    fn update_requires_ownership() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let other = fixtures::organization(&db, "other@example.com");
        let tour = create_tour(&db, &org, new_tour()).unwrap();
        assert!(matches!(
            update_tour(&db, &other, tour.id.as_str(), new_tour()),
            Err(Error::Forbidden)
        ));
    }

    #[test]
    fn assign_guide_to_own_tour() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let guide = fixtures::guide(&db, "guide@example.com");
        let tour = create_tour(&db, &org, new_tour()).unwrap();
        let tour = assign_guide(&db, &org, tour.id.as_str(), guide.id.as_str()).unwrap();
        assert_eq!(tour.guide_id, Some(guide.id));
    }

    #[test]
    fn zero_group_size_is_invalid() {
        let db = MockDb::default();
        let org = fixtures::organization(&db, "biz@example.com");
        let tour = NewTour {
            max_group_size: 0,
            ..new_tour()
        };
        assert!(matches!(
            create_tour(&db, &org, tour),
            Err(Error::GroupSize)
        ));
    }
}
