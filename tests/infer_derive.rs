//! Inference through `#[derive(Infer)]` on user-defined types.
//!
//! Covers primitive-only records, overrides at every nesting level,
//! function-typed fields, self-referential shapes and determinism under a
//! fixed seed.

use conjure::{
    between, constant, infer, infer_with, one_of, sequential, wrap, Generator, Infer,
    InferConfig, InferenceError, Source,
};
use std::collections::HashMap;

const SEED: i64 = 42;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("conjure=debug,conjure_infer=debug")
        .try_init()
        .ok();
}

#[derive(Debug, Clone, PartialEq, Infer)]
struct Address {
    street: String,
    number: u16,
}

#[derive(Debug, Clone, PartialEq, Infer)]
struct Customer {
    id: u64,
    name: String,
    active: bool,
    score: f64,
    address: Address,
    tags: Vec<String>,
    attributes: HashMap<String, i32>,
}

#[derive(Debug, Infer)]
struct Handler {
    _name: String,
    _callback: fn(String) -> bool,
}

#[derive(Debug, PartialEq, Infer)]
struct Node {
    value: u8,
    next: Option<Box<Node>>,
}

#[derive(Debug, Infer)]
struct Endless(Box<Endless>);

/// Five optional children per node: every node can fan out wider than its
/// share of the budget shrinks.
#[derive(Debug, Infer)]
struct Branch {
    a: Option<Box<Branch>>,
    b: Option<Box<Branch>>,
    c: Option<Box<Branch>>,
    d: Option<Box<Branch>>,
    e: Option<Box<Branch>>,
}

#[derive(Debug, Clone, PartialEq, Infer)]
enum Status {
    Pending,
    Shipped { tracking: String },
    Cancelled(u8),
}

#[derive(Debug, Infer)]
struct Pair<T> {
    left: T,
    right: T,
}

#[derive(Debug, PartialEq, Infer)]
struct Marker;

fn list_len(node: &Node) -> usize {
    1 + node.next.as_deref().map_or(0, list_len)
}

fn branch_count(branch: &Branch) -> usize {
    1 + [&branch.a, &branch.b, &branch.c, &branch.d, &branch.e]
        .into_iter()
        .filter_map(|child| child.as_deref())
        .map(branch_count)
        .sum::<usize>()
}

#[test]
fn test_primitive_only_struct_never_fails() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let mut customers = infer::<Customer>([])?;
    let mut src = Source::seeded(SEED);

    let batch = customers.try_generate_many(&mut src, 200)?;

    assert_eq!(batch.len(), 200);
    for customer in &batch {
        assert!(customer.name.chars().count() < 50);
        assert!(customer.score.is_finite());
        assert!(customer.tags.len() <= 50);
    }
    Ok(())
}

#[test]
fn test_overrides_apply_at_every_depth() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let mut customers = infer::<Customer>([
        wrap(constant("fixed".to_string())),
        wrap(between(100u16, 200)),
        wrap(sequential(1u64, u64::MAX, 1)),
    ])?;
    let mut src = Source::seeded(SEED);

    let batch = customers.generate_many(&mut src, 20);

    for (index, customer) in batch.iter().enumerate() {
        assert_eq!(customer.id, index as u64 + 1);
        assert_eq!(customer.name, "fixed");
        assert_eq!(customer.address.street, "fixed");
        assert!((100..=200).contains(&customer.address.number));
        assert!(customer.tags.iter().all(|tag| tag == "fixed"));
        assert!(customer.attributes.keys().all(|key| key == "fixed"));
    }
    Ok(())
}

#[test]
fn test_later_override_wins() -> Result<(), Box<dyn std::error::Error>> {
    let mut addresses = infer::<Address>([
        wrap(constant("first".to_string())),
        wrap(constant("second".to_string())),
    ])?;
    let mut src = Source::seeded(SEED);

    assert_eq!(addresses.generate_one(&mut src).street, "second");
    Ok(())
}

#[test]
fn test_override_never_replaces_target() -> Result<(), Box<dyn std::error::Error>> {
    let fixed = Address {
        street: "nowhere".to_string(),
        number: 0,
    };
    let mut addresses = infer::<Address>([wrap(constant(fixed.clone()))])?;
    let mut src = Source::seeded(SEED);

    let generated = addresses.generate_many(&mut src, 20);

    assert!(generated.iter().any(|address| *address != fixed));
    Ok(())
}

#[test]
fn test_function_field_is_not_inferrable() {
    init_logging();
    let err = infer::<Handler>([]).unwrap_err();

    match &err {
        InferenceError::NotInferrable { signature, .. } => {
            assert_eq!(signature.as_deref(), Some("(String) => (bool)"));
        }
        other => panic!("Expected NotInferrable, got {other:?}"),
    }
    assert!(err.to_string().contains("(String) => (bool)"));
}

#[test]
fn test_function_field_can_be_overridden() -> Result<(), Box<dyn std::error::Error>> {
    fn accept(_: String) -> bool {
        true
    }
    let mut handlers = infer::<Handler>([wrap(constant(accept as fn(String) -> bool))])?;
    let mut src = Source::seeded(SEED);

    let handler = handlers.try_generate_one(&mut src)?;

    assert!((handler._callback)(String::new()));
    Ok(())
}

#[test]
fn test_optional_self_reference_terminates() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = InferConfig::default();
    let mut lists = infer_with::<Node>(config.clone(), [])?;
    let mut src = Source::seeded(SEED);

    for list in lists.try_generate_many(&mut src, 100)? {
        assert!(list_len(&list) <= config.max_depth);
    }
    Ok(())
}

#[test]
fn test_wide_self_reference_stays_within_node_limit() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = InferConfig::default();
    let mut trees = infer_with::<Branch>(config.clone(), [])?;
    let mut src = Source::seeded(SEED);

    for tree in trees.try_generate_many(&mut src, 10)? {
        assert!(branch_count(&tree) <= config.max_nodes + config.max_depth);
    }
    Ok(())
}

#[test]
fn test_unconditional_self_reference_fails_and_poisons() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let mut endless = infer::<Endless>([])?;
    let mut src = Source::seeded(SEED);

    let first = endless.try_generate_one(&mut src);
    assert!(matches!(first, Err(InferenceError::DepthExceeded { .. })));
    assert!(endless.is_poisoned());

    let second = endless.try_generate_one(&mut src);
    assert_eq!(first.err(), second.err());
    Ok(())
}

#[test]
fn test_enum_covers_every_variant() -> Result<(), Box<dyn std::error::Error>> {
    let mut statuses = infer::<Status>([])?;
    let mut src = Source::seeded(SEED);

    let batch = statuses.generate_many(&mut src, 200);

    assert!(batch.contains(&Status::Pending));
    assert!(batch.iter().any(|s| matches!(s, Status::Shipped { .. })));
    assert!(batch.iter().any(|s| matches!(s, Status::Cancelled(_))));
    Ok(())
}

#[test]
fn test_enum_variant_fields_take_overrides() -> Result<(), Box<dyn std::error::Error>> {
    let mut statuses = infer::<Status>([wrap(constant(7u8))])?;
    let mut src = Source::seeded(SEED);

    for status in statuses.generate_many(&mut src, 50) {
        if let Status::Cancelled(code) = status {
            assert_eq!(code, 7);
        }
    }
    Ok(())
}

#[test]
fn test_generic_struct() -> Result<(), Box<dyn std::error::Error>> {
    let mut pairs = infer::<Pair<u8>>([wrap(one_of([3u8, 4]).map_err(|e| e.to_string())?)])?;
    let mut src = Source::seeded(SEED);

    for pair in pairs.generate_many(&mut src, 20) {
        assert!(pair.left == 3 || pair.left == 4);
        assert!(pair.right == 3 || pair.right == 4);
    }
    Ok(())
}

#[test]
fn test_unit_struct() -> Result<(), Box<dyn std::error::Error>> {
    let mut markers = infer::<Marker>([])?;
    let mut src = Source::seeded(SEED);

    assert_eq!(markers.generate_one(&mut src), Marker);
    Ok(())
}

#[test]
fn test_same_seed_same_sequence() -> Result<(), Box<dyn std::error::Error>> {
    let mut first_src = Source::seeded(SEED);
    let mut second_src = Source::seeded(SEED);

    let first = infer::<Customer>([])?.generate_many(&mut first_src, 25);
    let second = infer::<Customer>([])?.generate_many(&mut second_src, 25);

    assert_eq!(first, second);
    Ok(())
}
