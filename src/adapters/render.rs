use crate::domain::model::{Assignment, Cycle};
use crate::domain::ports::{CycleRenderer, OutputFormat};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// `Secret Santa Cycle:` followed by one `giver -> receiver` line per edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl CycleRenderer for TextRenderer {
    fn render(&self, cycle: &Cycle, _seed: u64) -> Result<String> {
        let mut out = String::from("Secret Santa Cycle:\n");
        for assignment in cycle.assignments() {
            out.push_str(&format!("{} -> {}\n", assignment.giver, assignment.receiver));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct DrawDocument<'a> {
    participants: usize,
    seed: u64,
    drawn_at: DateTime<Utc>,
    assignments: Vec<Assignment<'a>>,
}

impl CycleRenderer for JsonRenderer {
    fn render(&self, cycle: &Cycle, seed: u64) -> Result<String> {
        let document = DrawDocument {
            participants: cycle.len(),
            seed,
            drawn_at: Utc::now(),
            assignments: cycle.assignments().collect(),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}

pub fn renderer_for(format: OutputFormat) -> Box<dyn CycleRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Participant;

    fn cycle() -> Cycle {
        Cycle::from_verified(vec![
            Participant::from("Alice"),
            Participant::from("Charlie"),
            Participant::from("Bob"),
            Participant::from("Dave"),
        ])
    }

    #[test]
    fn test_text_includes_wraparound() {
        let text = TextRenderer.render(&cycle(), 9).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Secret Santa Cycle:",
                "Alice -> Charlie",
                "Charlie -> Bob",
                "Bob -> Dave",
                "Dave -> Alice",
            ]
        );
    }

    #[test]
    fn test_json_document() {
        let json = JsonRenderer.render(&cycle(), 9).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["participants"], 4);
        assert_eq!(value["seed"], 9);
        assert!(value["drawn_at"].is_string());

        let assignments = value["assignments"].as_array().unwrap();
        assert_eq!(assignments.len(), 4);
        assert_eq!(assignments[3]["giver"], "Dave");
        assert_eq!(assignments[3]["receiver"], "Alice");
    }

    #[test]
    fn test_renderer_for_format() {
        let text = renderer_for(OutputFormat::Text).render(&cycle(), 1).unwrap();
        assert!(text.starts_with("Secret Santa Cycle:"));

        let json = renderer_for(OutputFormat::Json).render(&cycle(), 1).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }
}
