use speck_syntax::{FieldNode, MethodNode, Modifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No visibility modifier.
    PackagePrivate,
}

impl Visibility {
    /// Visibility encoded in `modifiers`.
    ///
    /// Malformed flag sets with several visibility bits resolve to the widest one.
    pub fn of(modifiers: Modifiers) -> Visibility {
        if modifiers.contains(Modifiers::PUBLIC) {
            Visibility::Public
        } else if modifiers.contains(Modifiers::PROTECTED) {
            Visibility::Protected
        } else if modifiers.contains(Modifiers::PRIVATE) {
            Visibility::Private
        } else {
            Visibility::PackagePrivate
        }
    }

    /// The modifier bit for this visibility; empty for package-private.
    pub fn modifier(self) -> Modifiers {
        match self {
            Visibility::Public => Modifiers::PUBLIC,
            Visibility::Protected => Modifiers::PROTECTED,
            Visibility::Private => Modifiers::PRIVATE,
            Visibility::PackagePrivate => Modifiers::empty(),
        }
    }
}

/// Declarations that carry modifier flags.
pub trait HasModifiers {
    fn modifiers(&self) -> Modifiers;
    fn modifiers_mut(&mut self) -> &mut Modifiers;
}

impl HasModifiers for MethodNode {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

impl HasModifiers for FieldNode {
    fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn modifiers_mut(&mut self) -> &mut Modifiers {
        &mut self.modifiers
    }
}

pub fn visibility(field: &FieldNode) -> Visibility {
    Visibility::of(field.modifiers)
}

/// Replaces the visibility of `node`, keeping every other modifier.
pub fn set_visibility(node: &mut impl HasModifiers, visibility: Visibility) {
    let modifiers = node.modifiers_mut();
    modifiers.remove(Modifiers::VISIBILITY);
    modifiers.insert(visibility.modifier());
}
