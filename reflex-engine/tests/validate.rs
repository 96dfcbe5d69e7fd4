use reflex_core::{NodeCtx, Status};
use reflex_engine::{Node, NodeId, NodeKind, Tree, TreeError};

fn stub_condition() -> Node {
    Node::condition(|_ctx: &mut NodeCtx<'_>| Status::Success)
}

#[test]
fn accepts_a_well_formed_tree() {
    let mut tree = Tree::new();
    let a = tree.insert(stub_condition());
    let b = tree.insert(stub_condition());
    let inv = tree.insert(Node::inverter(b));
    let sel = tree.insert(Node::selector(vec![a, inv]));
    let root = tree.insert(Node::sequence(vec![sel]));

    assert_eq!(tree.validate(root), Ok(()));
}

#[test]
fn accepts_a_node_shared_between_parents() {
    let mut tree = Tree::new();
    let shared = tree.insert(stub_condition());
    let left = tree.insert(Node::sequence(vec![shared]));
    let right = tree.insert(Node::selector(vec![shared]));
    let root = tree.insert(Node::sequence(vec![left, right]));

    assert_eq!(tree.validate(root), Ok(()));
}

#[test]
fn rejects_an_unknown_root() {
    let tree = Tree::new();
    let ghost = NodeId::from_raw(3);
    assert_eq!(tree.validate(ghost), Err(TreeError::UnknownRoot(ghost)));
}

#[test]
fn rejects_a_dangling_child_slot() {
    let mut tree = Tree::new();
    let a = tree.insert(stub_condition());
    let ghost = NodeId::from_raw(42);
    let seq = tree.insert(Node::sequence(vec![a, ghost]));

    assert_eq!(
        tree.validate(seq),
        Err(TreeError::DanglingChild { node: seq, slot: 1 })
    );
}

#[test]
fn rejects_inverter_arity_violations() {
    let mut tree = Tree::new();
    let childless = tree.insert(Node::new(NodeKind::Inverter, None, Vec::new(), None));
    assert_eq!(
        tree.validate(childless),
        Err(TreeError::InverterArity {
            node: childless,
            children: 0,
        })
    );
}

#[test]
fn rejects_a_leaf_without_a_callback() {
    let mut tree = Tree::new();
    let mute = tree.insert(Node::new(NodeKind::Condition, None, Vec::new(), None));
    assert_eq!(
        tree.validate(mute),
        Err(TreeError::MissingCallback { node: mute })
    );
}

#[test]
fn rejects_a_leaf_with_children() {
    let mut tree = Tree::new();
    let a = tree.insert(stub_condition());
    let weird = tree.insert(Node::new(
        NodeKind::Action,
        Some(Box::new(|_ctx: &mut NodeCtx<'_>| Status::Success)),
        vec![a],
        None,
    ));
    assert_eq!(
        tree.validate(weird),
        Err(TreeError::LeafWithChildren { node: weird })
    );
}

#[test]
fn rejects_a_self_cycle() {
    let mut tree = Tree::new();
    // First insertion gets id 0, so this sequence is its own child.
    let knot = tree.insert(Node::sequence(vec![NodeId::from_raw(0)]));
    assert_eq!(tree.validate(knot), Err(TreeError::Cycle { node: knot }));
}

#[test]
fn rejects_a_two_node_cycle() {
    let mut tree = Tree::new();
    let a = tree.insert(Node::sequence(vec![NodeId::from_raw(1)]));
    let b = tree.insert(Node::selector(vec![a]));
    assert_eq!(tree.validate(a), Err(TreeError::Cycle { node: a }));
    assert_eq!(tree.validate(b), Err(TreeError::Cycle { node: b }));
}

#[test]
fn validation_reports_are_displayable() {
    let err = TreeError::InverterArity {
        node: NodeId::from_raw(5),
        children: 3,
    };
    let text = err.to_string();
    assert!(text.contains("inverter"));
    assert!(text.contains('3'));
}
