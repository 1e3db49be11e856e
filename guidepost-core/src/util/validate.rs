use guidepost_entities::{guide::Guide, tour::Tour};
use thiserror::Error;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub fn is_long_enough(s: &str, min_len: usize) -> bool {
    s.trim().chars().count() >= min_len
}

#[derive(Debug, Error)]
pub enum TourInvalidation {
    #[error("Invalid name")]
    Name,
    #[error("Invalid group size")]
    GroupSize,
    #[error("Duplicate itinerary sequence index")]
    ItinerarySequence,
}

impl Validate for Tour {
    type Error = TourInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.max_group_size == 0 {
            return Err(Self::Error::GroupSize);
        }
        let mut sequences: Vec<_> = self.itinerary.iter().map(|s| s.sequence).collect();
        sequences.sort_unstable();
        let len_before = sequences.len();
        sequences.dedup();
        if sequences.len() != len_before {
            return Err(Self::Error::ItinerarySequence);
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum GuideProfileInvalidation {
    #[error("Invalid school")]
    School,
}

impl Validate for Guide {
    type Error = GuideProfileInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.school.trim().is_empty() {
            return Err(Self::Error::School);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_entities::{builders::*, tour::ItineraryStop};

    #[test]
    fn min_length_counts_characters_not_bytes() {
        assert!(is_long_enough("ääääähmmmm", 10));
        assert!(!is_long_enough("   short   ", 10));
    }

    #[test]
    fn tour_with_duplicate_sequence_is_invalid() {
        let stop = |sequence| ItineraryStop {
            sequence,
            title: "stop".into(),
            location: "somewhere".into(),
            duration_minutes: 30,
            description: "".into(),
            time: "09:00".into(),
        };
        let mut tour = Tour::build().name("City walk").finish();
        tour.max_group_size = 10;
        tour.itinerary = vec![stop(0), stop(1)];
        assert!(tour.validate().is_ok());
        tour.itinerary = vec![stop(0), stop(0)];
        assert!(tour.validate().is_err());
    }
}
