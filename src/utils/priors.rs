use crate::utils::{MotifError, Result, SoftColumn};
use std::io::BufRead;

/// Baseline prior pseudocounts per model name, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriorTable {
    entries: Vec<(String, SoftColumn)>,
}

impl PriorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, prior: SoftColumn) {
        self.entries.push((name.into(), prior));
    }

    /// First entry with a matching name wins.
    pub fn get(&self, name: &str) -> Result<&SoftColumn> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, prior)| prior)
            .ok_or_else(|| MotifError::PriorNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = PriorTable::new();

        for (line_number, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                MotifError::Input(format!("Error reading line {}: {}", line_number + 1, e))
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (name, prior) =
                parse_prior_line(line).map_err(|e| e.at_line(line_number + 1))?;
            if table.get(name).is_ok() {
                log::warn!(
                    "Duplicate prior '{}' at line {} is shadowed by an earlier entry",
                    name,
                    line_number + 1
                );
            }
            table.insert(name, prior);
        }

        Ok(table)
    }
}

fn parse_prior_line(line: &str) -> Result<(&str, SoftColumn)> {
    let mut parts = line.split_whitespace();
    let name = parts
        .next()
        .ok_or_else(|| MotifError::Input("Missing prior name".to_string()))?;
    let values = parts
        .map(|value| {
            value
                .parse::<f64>()
                .map_err(|e| MotifError::Input(format!("Invalid pseudocount '{}': {}", value, e)))
        })
        .collect::<Result<Vec<f64>>>()?;
    let prior: SoftColumn = values.try_into().map_err(|v: Vec<f64>| {
        MotifError::Input(format!(
            "Expected 5 pseudocounts (G A T C gap) for prior '{}', found {}",
            name,
            v.len()
        ))
    })?;
    if prior.iter().any(|&p| p < 0.0) {
        return Err(MotifError::Input(format!(
            "Negative pseudocount in prior '{}'",
            name
        )));
    }
    Ok((name, prior))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priors_from_reader() {
        let data = "\
# name G A T C gap\n\
baseline-default 1 1 1 1 0.5\n\
\n\
baseline-tata 0.2 0.8 0.8 0.2 1\n";
        let table = PriorTable::from_reader(std::io::Cursor::new(data)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("baseline-default").unwrap(),
            &[1.0, 1.0, 1.0, 1.0, 0.5]
        );
        assert_eq!(table.get("baseline-tata").unwrap()[1], 0.8);
    }

    #[test]
    fn test_priors_first_match_wins() {
        let mut table = PriorTable::new();
        table.insert("x", [1.0; 5]);
        table.insert("x", [2.0; 5]);
        assert_eq!(table.get("x").unwrap(), &[1.0; 5]);
    }

    #[test]
    fn test_priors_missing_name() {
        let table = PriorTable::new();
        assert!(matches!(
            table.get("baseline-default"),
            Err(MotifError::PriorNotFound(name)) if name == "baseline-default"
        ));
    }

    #[test]
    fn test_priors_from_reader_incomplete_line() {
        let data = "baseline-default 1 1 1 1\n";
        let result = PriorTable::from_reader(std::io::Cursor::new(data));
        assert!(result.is_err());
    }

    #[test]
    fn test_priors_from_reader_invalid_value() {
        let data = "baseline-default 1 1 x 1 1\n";
        let result = PriorTable::from_reader(std::io::Cursor::new(data));
        assert!(matches!(result, Err(MotifError::Input(_))));
    }
}
