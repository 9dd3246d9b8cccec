/// A gateway reply carrying all three labeled suggestion lines, with mixed
/// casing and a fullwidth colon to match what the upstream model tends to
/// produce.
pub fn suggestions_fixture() -> &'static str {
    return r#"
Here are three ways to frame your research:

storytelling: Open with the night the power grid failed and your model kept the lights on.
Metaphor： Your algorithm is a traffic controller for data packets.
ANALOGY: Training the network is like teaching a child to ride a bike.

Good luck with the talk!
"#
    .trim();
}

/// A gateway reply with none of the expected labels.
pub fn unlabeled_fixture() -> &'static str {
    return "I'm not sure how to frame that. Could you tell me more about the audience?";
}
