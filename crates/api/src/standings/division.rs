use super::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivisionInfo {
    pub code: String,
    pub name: String,
}

impl DivisionInfo {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// The closed set of divisions competing in a deployment, in display order.
///
/// Order matters: aggregated rows come out in this order, so it is also the residual
/// order for divisions that tie on every ranking key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionSet {
    divisions: Vec<DivisionInfo>,
}

impl DivisionSet {
    /// Duplicate codes keep their first occurrence.
    pub fn new(divisions: impl IntoIterator<Item = DivisionInfo>) -> Self {
        let mut unique: Vec<DivisionInfo> = Vec::new();
        for division in divisions {
            if !unique.iter().any(|d| d.code == division.code) {
                unique.push(division);
            }
        }
        Self { divisions: unique }
    }

    /// Build a set where each division is named after its code.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(codes.into_iter().map(|code| {
            let code = code.into();
            DivisionInfo::new(code.clone(), code)
        }))
    }

    pub fn len(&self) -> usize {
        self.divisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.divisions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DivisionInfo> {
        self.divisions.iter()
    }

    pub fn position(&self, code: &str) -> Option<usize> {
        self.divisions.iter().position(|d| d.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.position(code).is_some()
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.divisions
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.name.as_str())
    }

    pub fn require(&self, code: &str) -> Result<(), ValidationError> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(ValidationError::UnknownDivision(code.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_occurrence_of_duplicate_codes() {
        let set = DivisionSet::new([
            DivisionInfo::new("A", "Anarchy"),
            DivisionInfo::new("B", "Big Dawgs"),
            DivisionInfo::new("A", "Impostor"),
        ]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.name_of("A"), Some("Anarchy"));
        assert_eq!(set.position("B"), Some(1));
    }

    #[test]
    fn require_rejects_codes_outside_the_set() {
        let set = DivisionSet::from_codes(["A", "B", "C"]);

        assert!(set.require("C").is_ok());
        assert_eq!(
            set.require("Z"),
            Err(ValidationError::UnknownDivision("Z".to_string()))
        );
    }
}
