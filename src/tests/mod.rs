use crate::core::errors::DemoError;
use crate::core::session::DemoApp;
use crate::core::shm::ShmBuffer;
use crate::core::tree;

#[test]
fn test_unbound_registry_fails_before_any_surface_exists() {
    // verify() is the gate between bootstrap and tree building; with
    // nothing bound it must report the first missing interface.
    let app = DemoApp::default();
    match app.verify() {
        Err(DemoError::MissingGlobal(name)) => assert_eq!(name, "wl_compositor"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("verify succeeded with no globals bound"),
    }
}

#[test]
fn test_missing_global_error_names_the_interface() {
    let err = DemoError::MissingGlobal("wl_subcompositor");
    assert!(err.to_string().contains("wl_subcompositor"));
}

#[test]
fn test_demo_tree_is_one_toplevel_and_three_subsurfaces() {
    let plan = tree::plan();
    assert_eq!(plan.len(), 4);
    assert_eq!(plan.iter().filter(|slot| slot.parent.is_none()).count(), 1);
    assert_eq!(plan.iter().filter(|slot| slot.parent.is_some()).count(), 3);
}

#[test]
fn test_demo_tree_nests_two_levels_deep() {
    let plan = tree::plan();
    let grandchild = plan[tree::YELLOW];
    let parent = plan[grandchild.parent.unwrap()];
    assert!(parent.parent.is_some(), "yellow must hang off a subsurface");
    assert_eq!(parent.parent, Some(tree::ROOT));
}

#[test]
fn test_demo_buffers_hold_their_colors() {
    for slot in tree::plan() {
        let buffer = ShmBuffer::new(tree::SIZE, tree::SIZE, slot.color).unwrap();
        assert_eq!(buffer.len(), (tree::SIZE * tree::SIZE * 4) as usize);
        assert_eq!(buffer.pixel(0, 0), slot.color);
        assert_eq!(buffer.pixel(tree::SIZE - 1, tree::SIZE - 1), slot.color);
    }
}

#[test]
fn test_stacking_directives_are_fixed() {
    // The paint order must not depend on anything run-to-run; the
    // directives are compile-time constants.
    assert_eq!(tree::STACKING, [(tree::RED, tree::GREEN), (tree::GREEN, tree::ROOT)]);
}
