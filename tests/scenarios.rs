//! End-to-end generation scenarios.

use seedr::{ChoiceKind, Command, PossibilityLibrary, Rect, WorldSeedr};

fn library(text: &str) -> PossibilityLibrary {
    PossibilityLibrary::from_ron_str(text).unwrap()
}

#[test]
fn certain_row_fills_left_to_right() {
    let library = library(
        r#"
        {
            "row": (
                width: 30,
                height: 10,
                contents: (
                    mode: Certain,
                    direction: right,
                    children: [
                        (title: "a", type: Known),
                        (title: "b", type: Known),
                    ],
                ),
            ),
            "a": (width: 10, height: 10, contents: (mode: Certain, children: [])),
            "b": (width: 20, height: 10, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    seedr
        .generate_full(&Command::new("row", Rect::new(10, 30, 0, 0)))
        .unwrap();

    let commands = seedr.generated_commands();
    assert_eq!(commands.len(), 2);

    assert_eq!(commands[0].title, "a");
    assert_eq!(commands[0].rect, Rect::new(10, 10, 0, 0));

    assert_eq!(commands[1].title, "b");
    assert_eq!(commands[1].rect, Rect::new(10, 30, 0, 10));
}

#[test]
fn repeat_terminates_on_exhaustion() {
    let library = library(
        r#"
        {
            "floor": (
                width: 25,
                height: 10,
                contents: (
                    mode: Repeat,
                    direction: right,
                    children: [(title: "plank", type: Known)],
                ),
            ),
            "plank": (width: 10, height: 10, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    seedr
        .generate_full(&Command::new("floor", Rect::new(10, 25, 0, 0)))
        .unwrap();

    // Two planks fit; the third would not.
    let commands = seedr.generated_commands();
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0].rect, Rect::new(10, 10, 0, 0));
    assert_eq!(commands[1].rect, Rect::new(10, 20, 0, 10));
}

#[test]
fn random_branch_aborts_past_its_limit() {
    let library = library(
        r#"
        {
            "field": (
                width: 100,
                height: 10,
                contents: (
                    mode: Random,
                    direction: right,
                    limit: 3,
                    children: [(title: "crop", type: Known, percent: 100.0)],
                ),
            ),
            "crop": (width: 10, height: 10, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);

    // Plenty of room: more than three crops would be produced, so the whole
    // branch yields nothing.
    let generated = seedr.generate("field", Rect::new(10, 100, 0, 0)).unwrap();
    assert!(generated.is_none());

    // A region with room for exactly three exhausts naturally at the limit.
    let generated = seedr.generate("field", Rect::new(10, 30, 0, 0)).unwrap();
    assert_eq!(generated.unwrap().children.len(), 3);
}

#[test]
fn multiple_fans_siblings_with_spacing() {
    let library = library(
        r#"
        {
            "fan": (
                width: 100,
                height: 10,
                contents: (
                    mode: Multiple,
                    direction: right,
                    spacing: 5,
                    children: [
                        (title: "card", type: Known),
                        (title: "card", type: Known),
                        (title: "card", type: Known),
                    ],
                ),
            ),
            "card": (width: 10, height: 10, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    let generated = seedr
        .generate("fan", Rect::new(10, 100, 0, 0))
        .unwrap()
        .unwrap();

    // Child k is parsed against a region whose left edge sits at 5k.
    let lefts: Vec<i32> = generated.children.iter().map(|c| c.rect.left).collect();
    assert_eq!(lefts, vec![0, 5, 10]);
}

#[test]
fn snap_collapses_children_onto_the_named_edge() {
    let library = library(
        r#"
        {
            "room": (
                width: 50,
                height: 100,
                contents: (
                    mode: Certain,
                    direction: right,
                    children: [(title: "crate", type: Known)],
                ),
            ),
            "crate": (
                width: 10,
                height: 30,
                contents: (mode: Certain, snap: bottom, children: []),
            ),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    let generated = seedr
        .generate("room", Rect::new(100, 50, 0, 0))
        .unwrap()
        .unwrap();

    let child = &generated.children[0];
    assert_eq!(child.rect.bottom, 0);
    assert_eq!(child.rect.top, 30);
}

#[test]
fn final_children_copy_their_source_dimensions() {
    let library = library(
        r#"
        {
            "scene": (
                width: 64,
                height: 64,
                contents: (
                    mode: Certain,
                    direction: right,
                    children: [(title: "poplar", type: Final, source: "tree")],
                ),
            ),
            "tree": (width: 16, height: 16, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    let host = Rect::new(64, 64, 0, 0);
    let generated = seedr.generate("scene", host).unwrap().unwrap();

    let child = &generated.children[0];
    assert_eq!(child.kind, ChoiceKind::Known);
    assert_eq!(child.rect, host);
    assert_eq!(child.size.x, 16);
    assert_eq!(child.size.y, 16);

    // And it lands in the command buffer as a terminal.
    seedr.generate_full(&Command::new("scene", host)).unwrap();
    let commands = seedr.generated_commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].title, "poplar");
    assert_eq!(commands[0].rect, host);
}

#[test]
fn nested_schemas_expand_into_terminals() {
    let library = library(
        r#"
        {
            "land": (
                width: 60,
                height: 10,
                contents: (
                    mode: Certain,
                    direction: right,
                    children: [
                        (title: "meadow", type: Random),
                        (title: "rock", type: Known),
                    ],
                ),
            ),
            "meadow": (
                width: 40,
                height: 10,
                contents: (
                    mode: Repeat,
                    direction: right,
                    children: [(title: "grass", type: Known)],
                ),
            ),
            "grass": (width: 10, height: 10, contents: (mode: Certain, children: [])),
            "rock": (width: 20, height: 10, contents: (mode: Certain, children: [])),
        }
        "#,
    );

    let mut seedr = WorldSeedr::from_seed(library, 1);
    seedr
        .generate_full(&Command::new("land", Rect::new(10, 60, 0, 0)))
        .unwrap();

    // The meadow expands into four grass tiles, then the rock follows.
    let titles: Vec<&str> = seedr
        .generated_commands()
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, vec!["grass", "grass", "grass", "grass", "rock"]);

    let commands = seedr.generated_commands();
    assert_eq!(commands[3].rect, Rect::new(10, 40, 0, 30));
    assert_eq!(commands[4].rect, Rect::new(10, 60, 0, 40));
}
