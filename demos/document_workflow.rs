//! Document Workflow State Machine
//!
//! This example demonstrates entry/exit hooks and per-transition metadata.
//!
//! Key concepts:
//! - Hooks firing in leave-then-enter order around each move
//! - Metadata passed through to both hooks unchanged
//! - The append-only audit log
//!
//! Run with: cargo run --example document_workflow

use serde::{Deserialize, Serialize};
use switchyard::{Fsm, FsmError, Metadata, StateHooks};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
enum Document {
    Draft,
    Review,
    Approved,
    Published,
}

fn main() -> Result<(), FsmError<Document>> {
    println!("=== Document Workflow ===\n");

    let mut fsm: Fsm<Document> = Fsm::new();

    fsm.register_state_with(
        Document::Draft,
        StateHooks::new().on_leave(|to: &Document, md: &Metadata| {
            let author = md.get("author").map(String::as_str).unwrap_or("unknown");
            println!("leaving Draft for {to:?} (author: {author})");
        }),
    );
    fsm.register_state_with(
        Document::Review,
        StateHooks::new()
            .on_enter(|from: &Document, _md: &Metadata| {
                println!("entered Review from {from:?}");
            })
            .on_leave(|to: &Document, md: &Metadata| {
                let reviewer = md.get("reviewer").map(String::as_str).unwrap_or("unknown");
                println!("leaving Review for {to:?} (reviewer: {reviewer})");
            }),
    );
    fsm.register_state_with(
        Document::Approved,
        StateHooks::new().on_enter(|from: &Document, _md: &Metadata| {
            println!("entered Approved from {from:?}");
        }),
    );
    fsm.register_state(Document::Published);

    fsm.register_transition(Document::Draft, Document::Review);
    fsm.register_transition(Document::Review, Document::Draft);
    fsm.register_transition(Document::Review, Document::Approved);
    fsm.register_transition(Document::Approved, Document::Published);

    fsm.initialize(Document::Draft)?;

    let submit = Metadata::from([("author".to_string(), "ada".to_string())]);
    fsm.transition(Document::Review, &submit)?;

    let approve = Metadata::from([("reviewer".to_string(), "grace".to_string())]);
    fsm.transition(Document::Approved, &approve)?;

    fsm.transition(Document::Published, &Metadata::new())?;

    println!("\nFinal state: {:?}", fsm.current().unwrap());
    println!("Traversal:");
    for record in fsm.log().records() {
        println!("  {:?} -> {:?} at {}", record.from, record.to, record.timestamp);
    }

    // Published is a dead end; the error kind says so.
    let err = fsm
        .transition(Document::Draft, &Metadata::new())
        .expect_err("Published has no outbound rules");
    println!("\nRejected move: {err}");

    println!("\n=== Example Complete ===");
    Ok(())
}
