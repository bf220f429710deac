use crate::domain::model::{Participant, PartnerPair, Roster};
use crate::domain::ports::{ConfigProvider, RosterSource};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_required_field;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Reads the participants file (one name per line) and the optional partners file
/// (one comma-separated pair per line).
#[derive(Debug, Clone)]
pub struct FileRosterLoader {
    participants_path: PathBuf,
    partners_path: Option<PathBuf>,
}

impl FileRosterLoader {
    pub fn new(participants_path: impl Into<PathBuf>, partners_path: Option<PathBuf>) -> Self {
        Self {
            participants_path: participants_path.into(),
            partners_path,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let participants = config.participants_path().map(str::to_string);
        let participants = validate_required_field("participants", &participants)?;
        Ok(Self::new(
            participants.as_str(),
            config.partners_path().map(PathBuf::from),
        ))
    }
}

impl RosterSource for FileRosterLoader {
    fn load(&self) -> Result<Roster> {
        tracing::debug!("Reading participants from {}", self.participants_path.display());
        let bytes = fs::read(&self.participants_path)?;
        let content = String::from_utf8(bytes).map_err(|e| SantaError::InvalidEncoding {
            path: self.participants_path.display().to_string(),
            offset: e.utf8_error().valid_up_to(),
        })?;
        let participants = dedup_participants(parse_participants(&content));

        let partner_pairs = match &self.partners_path {
            Some(path) => {
                tracing::debug!("Reading partnerships from {}", path.display());
                let file = fs::File::open(path)?;
                dedup_partner_pairs(parse_partners(file)?)
            }
            None => Vec::new(),
        };

        Ok(Roster::new(participants, partner_pairs))
    }
}

/// Roster held in memory; duplicates are dropped on load like the file loader does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoster {
    roster: Roster,
}

impl InMemoryRoster {
    pub fn new(roster: Roster) -> Self {
        Self { roster }
    }
}

impl RosterSource for InMemoryRoster {
    fn load(&self) -> Result<Roster> {
        Ok(Roster::new(
            dedup_participants(self.roster.participants.clone()),
            dedup_partner_pairs(self.roster.partner_pairs.clone()),
        ))
    }
}

pub fn parse_participants(content: &str) -> Vec<Participant> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Participant::from)
        .collect()
}

pub fn parse_partners<R: Read>(reader: R) -> Result<Vec<PartnerPair>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for result in rdr.records() {
        let record = result?;
        // 空白行（trim 之後只剩一個空欄位）
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match (record.len(), record.get(0), record.get(1)) {
            (2, Some(first), Some(second)) if !first.is_empty() && !second.is_empty() => {
                pairs.push(PartnerPair::new(first, second));
            }
            _ => {
                return Err(SantaError::MalformedPartnerLine {
                    line,
                    content: record.iter().collect::<Vec<_>>().join(","),
                });
            }
        }
    }

    Ok(pairs)
}

/// Keeps the first occurrence of each name, in input order.
pub fn dedup_participants(participants: Vec<Participant>) -> Vec<Participant> {
    let original = participants.len();
    let mut seen = HashSet::with_capacity(original);
    let unique: Vec<Participant> = participants
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect();

    if unique.len() < original {
        tracing::warn!(
            "Removed {} duplicate participant(s)",
            original - unique.len()
        );
    }
    unique
}

/// `A,B` and `B,A` count as the same partnership.
pub fn dedup_partner_pairs(pairs: Vec<PartnerPair>) -> Vec<PartnerPair> {
    let original = pairs.len();
    let mut seen = HashSet::with_capacity(original);
    let unique: Vec<PartnerPair> = pairs
        .into_iter()
        .filter(|pair| seen.insert(pair.clone()))
        .collect();

    if unique.len() < original {
        tracing::warn!(
            "Removed {} duplicate partnership(s)",
            original - unique.len()
        );
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorCategory, ErrorSeverity};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_participants_skips_blank_lines() {
        let parsed = parse_participants("Alice\n\n  Bob  \n\t\nCharlie\n");
        let names: Vec<&str> = parsed.iter().map(Participant::as_str).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_parse_partners_trims_fields() {
        let pairs = parse_partners("Alice , Bob\n\nCharlie,Dave\n".as_bytes()).unwrap();
        assert_eq!(
            pairs,
            vec![
                PartnerPair::new("Alice", "Bob"),
                PartnerPair::new("Charlie", "Dave")
            ]
        );
    }

    #[test]
    fn test_parse_partners_rejects_three_names() {
        let result = parse_partners("Alice,Bob\nCharlie,Dave,Eve\n".as_bytes());
        match result {
            Err(SantaError::MalformedPartnerLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, "Charlie,Dave,Eve");
            }
            other => panic!("expected MalformedPartnerLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_partners_rejects_single_name() {
        let result = parse_partners("Alice\n".as_bytes());
        assert!(matches!(
            result,
            Err(SantaError::MalformedPartnerLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_partners_rejects_comma_only_line() {
        let result = parse_partners("A,B\n , \nC,D\n".as_bytes());
        match result {
            Err(SantaError::MalformedPartnerLine { line, content }) => {
                assert_eq!(line, 2);
                assert_eq!(content, ",");
            }
            other => panic!("expected MalformedPartnerLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_partners_skips_whitespace_only_line() {
        let pairs = parse_partners("A,B\n   \nC,D\n".as_bytes()).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_dedup_participants_keeps_first_occurrence() {
        let deduped = dedup_participants(vec![
            "Bob".into(),
            "Alice".into(),
            "Bob".into(),
            "Carol".into(),
        ]);
        let names: Vec<&str> = deduped.iter().map(Participant::as_str).collect();
        assert_eq!(names, vec!["Bob", "Alice", "Carol"]);
    }

    #[test]
    fn test_dedup_partner_pairs_drops_reversed() {
        let deduped = dedup_partner_pairs(vec![
            PartnerPair::new("A", "B"),
            PartnerPair::new("B", "A"),
            PartnerPair::new("C", "D"),
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_file_loader_reads_both_files() {
        let mut participants = NamedTempFile::new().unwrap();
        writeln!(participants, "Alice\nBob\nCharlie\nDave\nAlice").unwrap();
        let mut partners = NamedTempFile::new().unwrap();
        writeln!(partners, "Alice,Bob\nBob,Alice").unwrap();

        let loader = FileRosterLoader::new(
            participants.path(),
            Some(partners.path().to_path_buf()),
        );
        let roster = loader.load().unwrap();

        assert_eq!(roster.participants.len(), 4);
        assert_eq!(roster.partner_pairs, vec![PartnerPair::new("Alice", "Bob")]);
    }

    #[test]
    fn test_file_loader_rejects_non_utf8_participants() {
        let mut participants = NamedTempFile::new().unwrap();
        participants.write_all(b"Alice\nB\xffb\nCharlie\n").unwrap();

        let loader = FileRosterLoader::new(participants.path(), None);
        match loader.load() {
            Err(err @ SantaError::InvalidEncoding { .. }) => {
                assert!(matches!(err, SantaError::InvalidEncoding { offset: 7, .. }));
                assert_eq!(err.category(), ErrorCategory::Input);
                assert_eq!(err.severity(), ErrorSeverity::High);
            }
            other => panic!("expected InvalidEncoding, got {:?}", other),
        }
    }

    #[test]
    fn test_file_loader_missing_file() {
        let loader = FileRosterLoader::new("/definitely/not/here.txt", None);
        assert!(matches!(loader.load(), Err(SantaError::IoError(_))));
    }
}
