use apitypings_core::{BasicKind, ConstValue, Field, Package, Type};

use super::{Config, MapError, generate, generate_with_config};
use crate::Error;
use crate::test_utils::{PKG, bytes, int, local, package, render_err};

fn record(package: &Package, name: &str) -> String {
    generate(package).unwrap().records[name].clone()
}

fn enum_block(package: &Package, name: &str) -> String {
    generate(package).unwrap().enums[name].clone()
}

fn strukt(fields: Vec<Field>) -> Type {
    Type::Struct { fields }
}

fn string_or_int() -> Type {
    Type::interface(vec![Type::union(vec![Type::string(), int()])])
}

#[test]
fn plain_record() {
    let pkg = package().type_decl(
        "Foo",
        "/src/api/foo.go",
        strukt(vec![
            Field::new("Bar", Type::string()),
            Field::new("Baz", Type::pointer(int())),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "Foo"), @r"
    // From api/foo.go
    export interface Foo {
      readonly Bar: string
      readonly Baz?: number
    }
    ");
}

#[test]
fn empty_record() {
    let pkg = package().type_decl("Empty", "empty.go", strukt(vec![]));

    insta::assert_snapshot!(record(&pkg, "Empty"), @r"
    // From api/empty.go
    export interface Empty {
    }
    ");
}

#[test]
fn json_tags_rename_omit_and_skip() {
    let pkg = package().type_decl(
        "User",
        "users.go",
        strukt(vec![
            Field::new("ID", Type::string()).tag(r#"json:"id""#),
            Field::new("Email", Type::string()).tag(r#"json:"email,omitempty""#),
            Field::new("Password", Type::string()).tag(r#"json:"-""#),
            Field::new("Dash", Type::string()).tag(r#"json:"-,""#),
            Field::new("CreatedAt", Type::string()).tag(r#"json:"created-at""#),
            Field::new("Untagged", int()),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "User"), @r#"
    // From api/users.go
    export interface User {
      readonly id: string
      readonly email?: string
      readonly "-": string
      readonly "created-at": string
      readonly Untagged: number
    }
    "#);
}

#[test]
fn typescript_override_and_notnull() {
    let pkg = package().type_decl(
        "Settings",
        "settings.go",
        strukt(vec![
            Field::new("Labels", Type::map(Type::string(), Type::interface(vec![])))
                .tag(r#"json:"labels" typescript:"Record<string, string>""#),
            Field::new("Limit", Type::pointer(int())).tag(r#"json:"limit" typescript:",notnull""#),
            Field::new("Mode", Type::string())
                .tag(r#"json:"mode,omitempty" typescript:"\"a\" | \"b\",notnull""#),
            Field::new("Internal", Type::Chan { elem: Box::new(int()) }).tag(r#"typescript:"-""#),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "Settings"), @r#"
    // From api/settings.go
    export interface Settings {
      readonly labels: Record<string, string>
      readonly limit: number
      readonly mode: "a" | "b"
    }
    "#);
}

#[test]
fn annotations_sit_above_their_field() {
    let pkg = package().type_decl(
        "Event",
        "events.go",
        strukt(vec![
            Field::new("Kind", Type::string()).tag(r#"json:"kind""#),
            Field::new("Data", Type::interface(vec![])).tag(r#"json:"data""#),
            Field::new("Level", Type::external("example.com/log", "Level", int()))
                .tag(r#"json:"level""#),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "Event"), @r#"
    // From api/events.go
    export interface Event {
      readonly kind: string
      // eslint-disable-next-line @typescript-eslint/no-explicit-any
      readonly data: any
      // This is likely an enum in an external package ("example.com/log.Level")
      readonly level: number
    }
    "#);
}

#[test]
fn nullable_known_types_are_optional() {
    let pkg = package().type_decl(
        "Session",
        "sessions.go",
        strukt(vec![
            Field::new("ID", Type::named("github.com/google/uuid", "UUID")).tag(r#"json:"id""#),
            Field::new("Owner", Type::named("github.com/google/uuid", "NullUUID"))
                .tag(r#"json:"owner""#),
            Field::new("ExpiresAt", Type::named("database/sql", "NullTime"))
                .tag(r#"json:"expires_at""#),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "Session"), @r"
    // From api/sessions.go
    export interface Session {
      readonly id: string
      readonly owner?: string
      readonly expires_at?: string
    }
    ");
}

#[test]
fn embedded_local_record_becomes_base() {
    let pkg = package()
        .type_decl("Base", "base.go", strukt(vec![Field::new("ID", Type::string())]))
        .type_decl("Audit", "base.go", strukt(vec![Field::new("At", Type::string())]))
        .type_decl(
            "Derived",
            "derived.go",
            strukt(vec![
                Field::new("Base", local("Base")).embedded_in(PKG),
                Field::new("Audit", Type::pointer(local("Audit"))).embedded_in(PKG),
                Field::new("Name", Type::string()),
            ]),
        );

    insta::assert_snapshot!(record(&pkg, "Derived"), @r"
    // From api/derived.go
    export interface Derived extends Base, Audit {
      readonly Name: string
    }
    ");
}

#[test]
fn tagged_embedded_record_stays_a_field() {
    let pkg = package()
        .type_decl("Base", "base.go", strukt(vec![]))
        .type_decl(
            "Wrapper",
            "wrapper.go",
            strukt(vec![Field::new("Base", local("Base"))
                .embedded_in(PKG)
                .tag(r#"json:"base""#)]),
        );

    insta::assert_snapshot!(record(&pkg, "Wrapper"), @r"
    // From api/wrapper.go
    export interface Wrapper {
      readonly base: Base
    }
    ");
}

#[test]
fn embedded_non_record_stays_a_field() {
    let pkg = package()
        .type_decl("Status", "status.go", Type::string())
        .type_decl(
            "Job",
            "jobs.go",
            strukt(vec![Field::new("Status", local("Status")).embedded_in(PKG)]),
        );

    insta::assert_snapshot!(record(&pkg, "Job"), @r"
    // From api/jobs.go
    export interface Job {
      readonly Status: Status
    }
    ");
}

#[test]
fn embedded_anonymous_struct_fails() {
    let pkg = package().type_decl(
        "Odd",
        "odd.go",
        strukt(vec![Field::new("Inner", strukt(vec![])).embedded_in(PKG)]),
    );

    let err = render_err(&pkg);
    assert_eq!(
        err,
        Error::Field {
            decl: "Odd".to_string(),
            file: "odd.go".to_string(),
            field: "Inner".to_string(),
            source: MapError::AnonymousEmbedded {
                ty: "struct{}".to_string()
            },
        }
    );
}

#[test]
fn generic_record() {
    let pkg = package().type_decl(
        "Box",
        "box.go",
        strukt(vec![
            Field::new("Value", Type::type_param("T", string_or_int())).tag(r#"json:"value""#),
            Field::new("History", Type::slice(Type::type_param("T", string_or_int())))
                .tag(r#"json:"history""#),
            Field::new("Key", Type::type_param("K", Type::interface(vec![Type::string()])))
                .tag(r#"json:"key""#),
        ]),
    );

    insta::assert_snapshot!(record(&pkg, "Box"), @r"
    // From api/box.go
    export interface Box<T extends string | number, K extends string> {
      readonly value: T
      readonly history: T[]
      readonly key: K
    }
    ");
}

#[test]
fn constraint_with_methods_still_binds_its_union() {
    let stringish = Type::Interface(apitypings_core::Interface {
        embedded: vec![Type::union(vec![Type::string(), int()])],
        methods: vec!["String".to_string()],
    });
    let pkg = package()
        .type_decl("Stringish", "constraints.go", stringish)
        .type_decl(
            "Box",
            "box.go",
            strukt(vec![Field::new("V", Type::type_param("T", local("Stringish")))]),
        );

    let types = generate(&pkg).unwrap();
    insta::assert_snapshot!(types.render(), @r"
    // Code generated by apitypings. DO NOT EDIT.

    // From api/box.go
    export interface Box<T extends string | number> {
      readonly V: T
    }

    // From api/constraints.go
    export type Stringish = string | number
    ");
}

#[test]
fn method_only_constraint_is_referenced_by_name() {
    let stringer = Type::Interface(apitypings_core::Interface {
        embedded: vec![],
        methods: vec!["String".to_string()],
    });
    let pkg = package()
        .type_decl("Stringer", "constraints.go", stringer.clone())
        .type_decl(
            "Labels",
            "labels.go",
            strukt(vec![
                Field::new("Primary", Type::type_param("L", local("Stringer"))),
                Field::new("Extra", Type::type_param("E", stringer)),
            ]),
        );

    insta::assert_snapshot!(record(&pkg, "Labels"), @r"
    // From api/labels.go
    export interface Labels<L extends Stringer, E extends any> {
      readonly Primary: L
      readonly Extra: E
    }
    ");
}

#[test]
fn conflicting_generic_binding_fails() {
    let pkg = package().type_decl(
        "Pair",
        "pair.go",
        strukt(vec![
            Field::new("A", Type::type_param("T", string_or_int())),
            Field::new("B", Type::type_param("T", Type::interface(vec![Type::string()]))),
        ]),
    );

    let err = render_err(&pkg);
    assert_eq!(
        err,
        Error::ConflictingGeneric {
            decl: "Pair".to_string(),
            file: "pair.go".to_string(),
            symbol: "T".to_string(),
            first: "string | number".to_string(),
            second: "string".to_string(),
        }
    );
}

#[test]
fn malformed_tag_names_field() {
    let pkg = package().type_decl(
        "Broken",
        "broken.go",
        strukt(vec![Field::new("Name", Type::string()).tag(r#"json:name"#)]),
    );

    let err = render_err(&pkg);
    assert!(matches!(
        &err,
        Error::Tag { decl, file, field, .. }
            if decl == "Broken" && file == "broken.go" && field == "Name"
    ));
    assert!(
        err.to_string().starts_with("invalid struct tag on Broken.Name (broken.go): "),
        "{err}"
    );
}

#[test]
fn field_mapping_failure_names_field() {
    let pkg = package().type_decl(
        "Closer",
        "closer.go",
        strukt(vec![Field::new(
            "Conn",
            Type::external(
                "io",
                "Closer",
                Type::Interface(apitypings_core::Interface {
                    embedded: vec![],
                    methods: vec!["Close".to_string()],
                }),
            ),
        )]),
    );

    let err = render_err(&pkg);
    assert_eq!(
        err.to_string(),
        r#"generate "Closer" (closer.go): field "Conn": only empty interface types are supported, found `interface{Close()}`"#
    );
}

#[test]
fn source_prefix_from_config() {
    let pkg = package().type_decl("Foo", "/work/codersdk/foo.go", strukt(vec![]));
    let config = Config::new().source_prefix("codersdk/");
    let types = generate_with_config(&pkg, &config).unwrap();

    insta::assert_snapshot!(&types.records["Foo"], @r"
    // From codersdk/foo.go
    export interface Foo {
    }
    ");
}

#[test]
fn enum_members_sorted_by_literal() {
    let pkg = package()
        .const_decl("ColorRed", "colors.go", "Color", ConstValue::String("red".into()))
        .type_decl("Color", "colors.go", Type::string())
        .const_decl("ColorBlue", "colors.go", "Color", ConstValue::String("blue".into()))
        .const_decl("ColorGreen", "colors.go", "Color", ConstValue::String("green".into()));

    insta::assert_snapshot!(enum_block(&pkg, "Color"), @r#"
    // From api/colors.go
    export type Color = "blue" | "green" | "red"
    "#);
}

#[test]
fn enum_duplicate_values_render_once() {
    let pkg = package()
        .type_decl("State", "state.go", Type::string())
        .const_decl("StateOK", "state.go", "State", ConstValue::String("ok".into()))
        .const_decl("StateDefault", "state.go", "State", ConstValue::String("ok".into()))
        .const_decl("StateFailed", "state.go", "State", ConstValue::String("failed".into()));

    insta::assert_snapshot!(enum_block(&pkg, "State"), @r#"
    // From api/state.go
    export type State = "failed" | "ok"
    "#);
}

#[test]
fn numeric_enum_members_are_literals() {
    let pkg = package()
        .type_decl("Level", "level.go", int())
        .const_decl("LevelHigh", "level.go", "Level", ConstValue::Int(2))
        .const_decl("LevelLow", "level.go", "Level", ConstValue::Int(0));

    insta::assert_snapshot!(enum_block(&pkg, "Level"), @r"
    // From api/level.go
    export type Level = 0 | 2
    ");
}

#[test]
fn uint64_enum_members_keep_their_value() {
    let pkg = package()
        .type_decl("Big", "big.go", Type::basic(BasicKind::Uint64))
        .const_decl("BigMax", "big.go", "Big", ConstValue::Uint(u64::MAX))
        .const_decl("BigZero", "big.go", "Big", ConstValue::Int(0));

    insta::assert_snapshot!(enum_block(&pkg, "Big"), @r"
    // From api/big.go
    export type Big = 0 | 18446744073709551615
    ");
}

#[test]
fn enum_base_without_constants_aliases_primitive() {
    let pkg = package()
        .type_decl("Email", "email.go", Type::string())
        .type_decl("Flag", "email.go", Type::basic(BasicKind::Bool));

    let types = generate(&pkg).unwrap();
    insta::assert_snapshot!(&types.enums["Email"], @r"
    // From api/email.go
    export type Email = string
    ");
    insta::assert_snapshot!(&types.enums["Flag"], @r"
    // From api/email.go
    export type Flag = boolean
    ");
}

#[test]
fn map_alias() {
    let pkg = package().type_decl("StringMap", "maps.go", Type::map(Type::string(), Type::string()));

    insta::assert_snapshot!(record(&pkg, "StringMap"), @r"
    // From api/maps.go
    export type StringMap = Record<string, string>
    ");
}

#[test]
fn byte_sequence_alias() {
    let pkg = package().type_decl("ID", "ids.go", bytes());

    insta::assert_snapshot!(record(&pkg, "ID"), @r"
    // From api/ids.go
    export type ID = string
    ");
}

#[test]
fn alias_annotations_precede_declaration() {
    let pkg = package().type_decl("Bag", "bag.go", Type::map(Type::string(), Type::interface(vec![])));

    insta::assert_snapshot!(record(&pkg, "Bag"), @r"
    // From api/bag.go
    // eslint-disable-next-line @typescript-eslint/no-explicit-any
    export type Bag = Record<string, any>
    ");
}

#[test]
fn generic_union_declaration() {
    let pkg = package().type_decl("Constraint", "constraints.go", string_or_int());

    let types = generate(&pkg).unwrap();
    insta::assert_snapshot!(&types.generics["Constraint"], @r"
    // From api/constraints.go
    export type Constraint = string | number
    ");
}

#[test]
fn single_term_constraint_is_one_term_union() {
    let pkg = package().type_decl(
        "Stringish",
        "constraints.go",
        Type::interface(vec![Type::string()]),
    );

    let types = generate(&pkg).unwrap();
    insta::assert_snapshot!(&types.generics["Stringish"], @r"
    // From api/constraints.go
    export type Stringish = string
    ");
}

#[test]
fn optional_union_term_marks_name() {
    let pkg = package().type_decl(
        "MaybeID",
        "constraints.go",
        Type::interface(vec![Type::union(vec![
            Type::string(),
            Type::named("github.com/google/uuid", "NullUUID"),
        ])]),
    );

    let types = generate(&pkg).unwrap();
    insta::assert_snapshot!(&types.generics["MaybeID"], @r"
    // From api/constraints.go
    export type MaybeID? = string | string
    ");
}
