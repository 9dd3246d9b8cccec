use super::Outline;
use super::StepBox;
use super::REORDER_HELP;

fn names(outline: &Outline) -> Vec<&str> {
    return outline
        .steps()
        .iter()
        .map(|step| return step.name.as_str())
        .collect();
}

// One box per step in display order, two lines tall, one blank line between.
fn boxes(outline: &Outline) -> Vec<StepBox> {
    return outline
        .steps()
        .iter()
        .enumerate()
        .map(|(idx, step)| {
            return StepBox {
                step_id: step.id,
                top: idx * 3,
                height: 2,
            };
        })
        .collect();
}

#[test]
fn it_detects_reorder_commands() {
    assert!(Outline::is_reorder_command("1 3 2"));
    assert!(Outline::is_reorder_command("  1   3 2  "));
    assert!(!Outline::is_reorder_command("1 3"));
    assert!(!Outline::is_reorder_command("1 3 2 4"));
    assert!(!Outline::is_reorder_command("one two three"));
    assert!(!Outline::is_reorder_command("1 3 2 please"));
}

#[test]
fn it_reorders_from_command() {
    let mut outline = Outline::default();
    let reply = outline.reorder_from_command("1 3 2");

    assert_eq!(names(&outline), vec!["Hook", "Resolution", "Exploration"]);
    assert!(reply.starts_with("Steps reordered to:"));
    assert!(reply.contains("1. Hook:"));
    assert!(reply.contains("2. Resolution:"));
    assert!(reply.contains("3. Exploration:"));
}

#[test]
fn it_reorders_every_position() {
    let mut outline = Outline::default();
    outline.reorder_from_command("3 1 2");
    assert_eq!(names(&outline), vec!["Resolution", "Hook", "Exploration"]);
}

#[test]
fn it_rejects_out_of_range_positions() {
    let mut outline = Outline::default();
    let reply = outline.reorder_from_command("1 2 4");

    assert_eq!(reply, REORDER_HELP);
    assert_eq!(names(&outline), vec!["Hook", "Exploration", "Resolution"]);
}

#[test]
fn it_rejects_zero_positions() {
    let mut outline = Outline::default();
    let reply = outline.reorder_from_command("0 1 2");

    assert_eq!(reply, REORDER_HELP);
    assert_eq!(names(&outline), vec!["Hook", "Exploration", "Resolution"]);
}

#[test]
fn it_rejects_duplicate_positions() {
    let mut outline = Outline::default();
    let reply = outline.reorder_from_command("1 1 2");

    assert_eq!(reply, REORDER_HELP);
    assert_eq!(names(&outline), vec!["Hook", "Exploration", "Resolution"]);
}

#[test]
fn it_keeps_the_same_identity_set_across_reorders() {
    let mut outline = Outline::default();
    outline.reorder_from_command("2 3 1");
    outline.reorder_from_command("3 2 1");

    let mut ids = outline
        .steps()
        .iter()
        .map(|step| return step.id)
        .collect::<Vec<u8>>();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn it_drags_a_step_up() {
    let mut outline = Outline::default();
    let geometry = boxes(&outline);

    outline.drag_start(3);
    assert_eq!(outline.dragged(), Some(3));

    // Pointer above the first box's center picks Hook as the insertion
    // point, so Resolution lands in front of it.
    outline.drag_over(0.0, &geometry);
    assert_eq!(names(&outline), vec!["Resolution", "Hook", "Exploration"]);

    assert!(outline.drag_end());
    assert_eq!(outline.dragged(), None);
}

#[test]
fn it_drags_a_step_before_the_last_box() {
    let mut outline = Outline::default();
    let geometry = boxes(&outline);

    // Centers sit at 1.0, 4.0, 7.0. A pointer at 5.0 is above only the last
    // center, so the dragged step is inserted before Resolution.
    outline.drag_start(1);
    outline.drag_over(5.0, &geometry);

    assert_eq!(names(&outline), vec!["Exploration", "Hook", "Resolution"]);
}

#[test]
fn it_ignores_drag_below_every_center() {
    let mut outline = Outline::default();
    let geometry = boxes(&outline);

    outline.drag_start(1);
    outline.drag_over(20.0, &geometry);

    assert_eq!(names(&outline), vec!["Hook", "Exploration", "Resolution"]);
}

#[test]
fn it_ignores_drag_over_without_drag_start() {
    let mut outline = Outline::default();
    let geometry = boxes(&outline);

    outline.drag_over(0.0, &geometry);

    assert_eq!(names(&outline), vec!["Hook", "Exploration", "Resolution"]);
    assert!(!outline.drag_end());
}

#[test]
fn it_ignores_drag_start_for_unknown_ids() {
    let mut outline = Outline::default();
    outline.drag_start(9);
    assert_eq!(outline.dragged(), None);
}
