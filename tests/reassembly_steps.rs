//! Behavioural tests for multi-part message reassembly.

mod test_helpers;

use eyre::{Result, eyre};
use inbound_text::message::domain::IncomingTextMessage;
use inbound_text::message::error::ReassemblyError;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use test_helpers::Carrier;

#[derive(Default)]
struct ReassemblyWorld {
    fragments: Vec<IncomingTextMessage>,
    result: Option<Result<IncomingTextMessage, ReassemblyError>>,
}

#[fixture]
fn world() -> ReassemblyWorld {
    ReassemblyWorld::default()
}

#[given("three carrier fragments \"Hel\", \"lo \" and \"World\"")]
fn three_fragments(world: &mut ReassemblyWorld) {
    let mut later = Carrier::with_body("lo ");
    later.timestamp += 1_000;
    later.pseudo_subject = "second".to_owned();

    world.fragments = vec![
        IncomingTextMessage::from_carrier(&Carrier::with_body("Hel")),
        IncomingTextMessage::from_carrier(&later),
        IncomingTextMessage::from_carrier(&Carrier::with_body("World")),
    ];
    world.result = None;
}

#[given("no fragments")]
fn no_fragments(world: &mut ReassemblyWorld) {
    world.fragments.clear();
    world.result = None;
}

#[when("the fragments are reassembled")]
fn reassemble(world: &mut ReassemblyWorld) {
    world.result = Some(IncomingTextMessage::from_fragments(&world.fragments));
}

#[then("the reassembled body is \"Hello World\"")]
fn reassembled_body(world: &ReassemblyWorld) -> Result<()> {
    let message = reassembled(world)?;

    assert_eq!(message.body(), "Hello World");
    Ok(())
}

#[then("every other field matches the first fragment")]
fn other_fields_from_first(world: &ReassemblyWorld) -> Result<()> {
    let message = reassembled(world)?;
    let first = world
        .fragments
        .first()
        .ok_or_else(|| eyre!("expected at least one fragment"))?;

    assert_eq!(message, &first.with_body(message.body()));
    Ok(())
}

#[then("reassembly fails with an empty fragment list error")]
fn empty_list_failure(world: &ReassemblyWorld) -> Result<()> {
    let result = world
        .result
        .as_ref()
        .ok_or_else(|| eyre!("expected reassembly to run"))?;

    assert_eq!(result, &Err(ReassemblyError::EmptyFragmentList));
    Ok(())
}

fn reassembled(world: &ReassemblyWorld) -> Result<&IncomingTextMessage> {
    world
        .result
        .as_ref()
        .ok_or_else(|| eyre!("expected reassembly to run"))?
        .as_ref()
        .map_err(|error| eyre!("reassembly failed: {error}"))
}

#[scenario(
    path = "tests/features/reassembly.feature",
    name = "Fragments are joined in order"
)]
fn fragments_joined_in_order(world: ReassemblyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/reassembly.feature",
    name = "Reassembly without fragments is rejected"
)]
fn empty_reassembly_rejected(world: ReassemblyWorld) {
    let _ = world;
}
