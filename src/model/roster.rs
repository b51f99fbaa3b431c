use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Repeater {
    pub rr_number: i64,
    pub club: Option<String>,
    pub long_name: String,
    pub output_mhz: f64,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct Roster {
    repeaters: Vec<Repeater>,
    by_number: HashMap<i64, usize>,
    club_n_repeaters: HashMap<String, usize>,
}

impl Roster {
    pub fn new(repeaters: Vec<Repeater>) -> Self {
        let mut by_number = HashMap::with_capacity(repeaters.len());
        let mut club_n_repeaters: HashMap<String, usize> = HashMap::new();
        for (idx, repeater) in repeaters.iter().enumerate() {
            if by_number.contains_key(&repeater.rr_number) {
                continue;
            }
            by_number.insert(repeater.rr_number, idx);
            if let Some(club) = &repeater.club {
                *club_n_repeaters.entry(club.clone()).or_insert(0) += 1;
            }
        }
        Self {
            repeaters,
            by_number,
            club_n_repeaters,
        }
    }

    pub fn get(&self, rr_number: i64) -> Option<&Repeater> {
        self.by_number
            .get(&rr_number)
            .and_then(|&idx| self.repeaters.get(idx))
    }

    pub fn club_of(&self, rr_number: i64) -> Option<&str> {
        self.get(rr_number).and_then(|r| r.club.as_deref())
    }

    pub fn club_size(&self, club: &str) -> usize {
        self.club_n_repeaters.get(club).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn n_clubs(&self) -> usize {
        self.club_n_repeaters.len()
    }
}
