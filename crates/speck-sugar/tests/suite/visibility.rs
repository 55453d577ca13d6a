use pretty_assertions::assert_eq;
use speck_sugar::{set_visibility, visibility, HasModifiers, Visibility};
use speck_syntax::{FieldNode, MethodNode, Modifiers};

#[test]
fn field_visibility_is_read_from_modifiers() {
    let mut field = FieldNode::new("count");
    assert_eq!(visibility(&field), Visibility::PackagePrivate);

    field.modifiers = Modifiers::PROTECTED | Modifiers::FINAL;
    assert_eq!(visibility(&field), Visibility::Protected);
}

#[test]
fn setting_visibility_keeps_other_modifiers() {
    let mut field = FieldNode::new("shared");
    field.modifiers = Modifiers::PUBLIC | Modifiers::STATIC | Modifiers::FINAL;

    set_visibility(&mut field, Visibility::Private);
    assert_eq!(
        field.modifiers,
        Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL
    );

    set_visibility(&mut field, Visibility::Private);
    assert_eq!(
        field.modifiers,
        Modifiers::PRIVATE | Modifiers::STATIC | Modifiers::FINAL
    );

    set_visibility(&mut field, Visibility::PackagePrivate);
    assert_eq!(field.modifiers, Modifiers::STATIC | Modifiers::FINAL);
    assert_eq!(visibility(&field), Visibility::PackagePrivate);
}

#[test]
fn methods_have_settable_visibility() {
    let mut method = MethodNode::new("helper");
    method.modifiers = Modifiers::PRIVATE | Modifiers::PROTECTED | Modifiers::SYNTHETIC;

    set_visibility(&mut method, Visibility::Public);
    assert_eq!(
        method.modifiers(),
        Modifiers::PUBLIC | Modifiers::SYNTHETIC
    );
    assert_eq!(Visibility::of(method.modifiers()), Visibility::Public);
}

#[test]
fn conflicting_visibility_bits_resolve_to_widest() {
    assert_eq!(
        Visibility::of(Modifiers::PRIVATE | Modifiers::PUBLIC),
        Visibility::Public
    );
    assert_eq!(
        Visibility::of(Modifiers::PRIVATE | Modifiers::PROTECTED),
        Visibility::Protected
    );
    assert_eq!(Visibility::PackagePrivate.modifier(), Modifiers::empty());
}
