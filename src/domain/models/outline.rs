#[cfg(test)]
#[path = "outline_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const REORDER_HELP: &str = r#"Please enter the new step order as three numbers, for example "1 3 2" to swap the second and third steps."#;

static REORDER_COMMAND: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"^\d+\s+\d+\s+\d+$").unwrap();
});

static NUMBERS: Lazy<Regex> = Lazy::new(|| {
    return Regex::new(r"\d+").unwrap();
});

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: u8,
    pub name: String,
    pub description: String,
}

impl Step {
    pub fn new(id: u8, name: &str, description: &str) -> Step {
        return Step {
            id,
            name: name.to_string(),
            description: description.to_string(),
        };
    }
}

/// Screen placement of one rendered step box, in bubble-list line
/// coordinates. Used to resolve mouse drags against the outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepBox {
    pub step_id: u8,
    pub top: usize,
    pub height: usize,
}

/// The three-step speech outline. Steps are only ever reordered. The step id
/// is the sole stable identity, array position carries display order.
pub struct Outline {
    steps: Vec<Step>,
    dragged: Option<u8>,
}

impl Default for Outline {
    fn default() -> Outline {
        return Outline {
            steps: vec![
                Step::new(1, "Hook", "An opening that grabs the audience's attention"),
                Step::new(2, "Exploration", "Walk through and explain the research itself"),
                Step::new(3, "Resolution", "Sum up the impact and significance of the work"),
            ],
            dragged: None,
        };
    }
}

impl Outline {
    pub fn steps(&self) -> &[Step] {
        return &self.steps;
    }

    pub fn dragged(&self) -> Option<u8> {
        return self.dragged;
    }

    /// True when the input looks like a reorder command, three
    /// whitespace-separated integers and nothing else.
    pub fn is_reorder_command(input: &str) -> bool {
        return REORDER_COMMAND.is_match(input.trim());
    }

    /// Applies a 1-based permutation typed by the user and returns the reply
    /// to show in chat. The new position i receives the step that sat at
    /// index (value at i) - 1. Anything that is not a permutation of the
    /// current positions returns the help text and leaves the order alone.
    pub fn reorder_from_command(&mut self, input: &str) -> String {
        let numbers = NUMBERS
            .find_iter(input)
            .filter_map(|m| return m.as_str().parse::<usize>().ok())
            .collect::<Vec<usize>>();

        if numbers.len() != 3 {
            return REORDER_HELP.to_string();
        }

        let indexes = numbers
            .iter()
            .map(|n| return n.wrapping_sub(1))
            .collect::<Vec<usize>>();

        let mut seen = [false; 3];
        for idx in &indexes {
            if *idx >= self.steps.len() || seen[*idx] {
                return REORDER_HELP.to_string();
            }
            seen[*idx] = true;
        }

        self.steps = indexes
            .iter()
            .map(|idx| return self.steps[*idx].clone())
            .collect();

        let listing = self
            .steps
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                return format!("{}. {}: {}", idx + 1, step.name, step.description);
            })
            .collect::<Vec<String>>()
            .join("\n");

        return format!("Steps reordered to:\n\n{listing}");
    }

    pub fn drag_start(&mut self, step_id: u8) {
        if self.steps.iter().any(|step| return step.id == step_id) {
            self.dragged = Some(step_id);
        }
    }

    /// Moves the dragged step while the pointer travels across the rendered
    /// step boxes. The insertion point is the box whose vertical center is
    /// nearest strictly below the pointer (smallest negative offset from
    /// pointer to center); the dragged step is removed from its old index and
    /// inserted immediately before that box's step.
    pub fn drag_over(&mut self, pointer_line: f32, boxes: &[StepBox]) {
        let dragged_id = match self.dragged {
            Some(id) => id,
            None => return,
        };

        let mut closest: Option<(f32, u8)> = None;
        for step_box in boxes {
            let center = step_box.top as f32 + step_box.height as f32 / 2.0;
            let offset = pointer_line - center;
            if offset < 0.0 && closest.map_or(true, |(best, _)| return offset > best) {
                closest = Some((offset, step_box.step_id));
            }
        }

        let after_id = match closest {
            Some((_, id)) => id,
            None => return,
        };
        if after_id == dragged_id {
            return;
        }

        let old_index = match self.position_of(dragged_id) {
            Some(idx) => idx,
            None => return,
        };
        let step = self.steps.remove(old_index);
        let new_index = match self.position_of(after_id) {
            Some(idx) => idx,
            None => {
                self.steps.insert(old_index, step);
                return;
            }
        };
        self.steps.insert(new_index, step);
    }

    /// Ends the drag. Returns true when a drag was actually in progress so
    /// the caller can notify the gateway of the finalized order.
    pub fn drag_end(&mut self) -> bool {
        return self.dragged.take().is_some();
    }

    fn position_of(&self, step_id: u8) -> Option<usize> {
        return self.steps.iter().position(|step| return step.id == step_id);
    }
}
