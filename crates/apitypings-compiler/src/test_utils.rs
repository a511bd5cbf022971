//! Test fixtures shared by the generator tests.

use apitypings_core::{BasicKind, Package, Type};

use crate::{Error, generate};

/// Import path of the package under test.
pub const PKG: &str = "example.com/api";

pub fn package() -> Package {
    Package::new(PKG, "api")
}

/// Reference to a declaration of the package under test.
pub fn local(name: &str) -> Type {
    Type::named(PKG, name)
}

pub fn int() -> Type {
    Type::basic(BasicKind::Int)
}

pub fn bytes() -> Type {
    Type::slice(Type::basic(BasicKind::Byte))
}

/// Render the full document, failing the test on generation errors.
pub fn render(package: &Package) -> String {
    generate(package)
        .expect("generation should succeed")
        .render()
}

pub fn render_err(package: &Package) -> Error {
    generate(package).expect_err("generation should fail")
}
