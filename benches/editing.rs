//! Benchmarks for the editing engine
//!
//! Run with: cargo bench editing

use termedit::editable::{Clipboard, EditCommand, EditorState, MoveTarget, Position};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn make_state(lines: usize) -> EditorState {
    EditorState::with_text(&"The quick brown fox jumps over the lazy dog.\n".repeat(lines))
}

// ============================================================================
// Editing
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn insert_middle(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| {
            let mut state = make_state(lines);
            state.move_to(Position::new(lines / 2, 10), false);
            state
        })
        .bench_local_refs(|state| {
            state.insert_text(divan::black_box("inserted text\n")).unwrap();
        });
}

#[divan::bench(args = [1_000, 10_000])]
fn type_and_undo_100_chars(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| (make_state(lines), Clipboard::new()))
        .bench_local_refs(|(state, clipboard)| {
            for _ in 0..100 {
                state
                    .execute(EditCommand::Insert("x".to_string()), clipboard)
                    .unwrap();
            }
            while state.can_undo() {
                state.execute(EditCommand::Undo, clipboard).unwrap();
            }
        });
}

#[divan::bench(args = [1_000, 10_000])]
fn select_all_cut_paste(bencher: divan::Bencher, lines: usize) {
    bencher
        .with_inputs(|| (make_state(lines), Clipboard::new()))
        .bench_local_refs(|(state, clipboard)| {
            for command in [EditCommand::SelectAll, EditCommand::Cut, EditCommand::Paste] {
                state.execute(command, clipboard).unwrap();
            }
        });
}

// ============================================================================
// Queries and motion
// ============================================================================

#[divan::bench(args = [1_000, 10_000, 100_000])]
fn full_text(bencher: divan::Bencher, lines: usize) {
    let state = make_state(lines);
    bencher.bench_local(|| divan::black_box(&state).full_text());
}

#[divan::bench(args = [1_000, 10_000])]
fn word_count(bencher: divan::Bencher, lines: usize) {
    let state = make_state(lines);
    bencher.bench_local(|| divan::black_box(&state).document().word_count());
}

#[divan::bench]
fn word_right_across_line(bencher: divan::Bencher) {
    bencher
        .with_inputs(|| make_state(100))
        .bench_local_refs(|state| {
            for _ in 0..10 {
                state.move_cursor(MoveTarget::WordRight, false);
            }
        });
}
