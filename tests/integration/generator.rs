//! End-to-end rendering through the public library API.

use godic_gen::core::GodicError;
use godic_gen::generator::Generator;
use godic_gen::test_utils::{abcd_generator, init_test_logging};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_single_dependency_box() {
    init_test_logging(None);

    let mut generator = Generator::new();
    generator.set_package("main").set_type_name("Box").add_dependency("value", "int", "{ return 10 }");

    let output = generator.render_to_string().unwrap();

    let expected = concat!(
        "package main\n",
        "\n",
        "type Box struct{\n",
        "\tvalue int\n",
        "}\n",
        "\n",
        "func (c *Box) NewValue() int { return 10 }\n",
        "\n",
        "\n",
        "func (c *Box) Value() int {\n",
        "\tif c.value == nil {\n",
        "\t\tc.value = c.NewValue()\n",
        "\t}\n",
        "\treturn c.value\n",
        "}\n",
        "\n",
    );
    assert_eq!(output, expected);
}

#[test]
fn test_zero_dependencies_has_empty_struct_and_no_methods() {
    let mut generator = Generator::new();
    generator.add_imports(["fmt", "os"]);

    let output = generator.render_to_string().unwrap();
    assert_eq!(output, "package main\n\nimport (\n\t\"fmt\"\n\t\"os\"\n)\n\ntype Container struct{}\n\n");
    assert_eq!(count(&output, "func "), 0);
}

#[test]
fn test_two_dependencies_in_insertion_order() {
    let mut generator = Generator::new();
    generator
        .add_dependency("a", "*A", "{ return &A{} }")
        .add_dependency("b", "*B", "{\n\ta := c.A()\n\treturn &B{a}\n}");

    let output = generator.render_to_string().unwrap();

    let field_a = output.find("\ta *A\n").unwrap();
    let field_b = output.find("\tb *B\n").unwrap();
    assert!(field_a < field_b);

    let positions: Vec<usize> = [
        "func (c *Container) NewA() *A",
        "func (c *Container) A() *A",
        "func (c *Container) NewB() *B",
        "func (c *Container) B() *B",
    ]
    .iter()
    .map(|needle| output.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "methods out of order:\n{output}");

    // The body referencing the `a` accessor is passed through unchanged
    assert!(output.contains("func (c *Container) NewB() *B {\n\ta := c.A()\n\treturn &B{a}\n}\n"));
}

#[test]
fn test_n_dependencies_yield_n_fields_and_2n_methods() {
    let generator = abcd_generator();
    let output = generator.render_to_string().unwrap();

    let struct_start = output.find("type DIContainer struct{\n").unwrap();
    let struct_end = struct_start + output[struct_start..].find("\n}\n").unwrap();
    let fields: Vec<&str> = output[struct_start..struct_end].lines().skip(1).collect();
    assert_eq!(fields, ["\ta *A", "\tb *B", "\tc *C", "\td *D"]);

    assert_eq!(count(&output, "func (cnt *DIContainer) "), 8);
    for name in ["A", "B", "C", "D"] {
        assert_eq!(count(&output, &format!(") New{name}() *{name} {{")), 1);
        assert_eq!(count(&output, &format!(") {name}() *{name} {{")), 1);
    }
}

#[test]
fn test_import_block_shapes() {
    fn render(imports: &[&str]) -> String {
        let mut generator = Generator::new();
        generator.add_imports(imports.iter().copied());
        generator.render_to_string().unwrap()
    }

    assert!(!render(&[]).contains("import"));
    assert!(render(&["fmt"]).contains("\nimport \"fmt\"\n\n"));
    assert!(render(&["fmt", "fmt"]).contains("import (\n\t\"fmt\"\n\t\"fmt\"\n)\n\n"));
}

#[test]
fn test_render_twice_is_byte_identical() {
    let generator = abcd_generator();

    let mut first = Vec::new();
    let mut second = Vec::new();
    generator.generate_to(&mut first).unwrap();
    generator.generate_to(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_ascii_dependency_name() {
    let mut generator = Generator::new();
    generator.add_dependency("ärger", "*Ärger", "{ return &Ärger{} }");

    let output = generator.render_to_string().unwrap();
    assert!(output.contains("\tärger *Ärger\n"));
    assert!(output.contains("func (c *Container) NewÄrger() *Ärger"));
    assert!(output.contains("func (c *Container) Ärger() *Ärger {"));
    assert!(output.contains("\tif c.ärger == nil {"));
}

#[test]
fn test_names_with_expanding_case_mappings_render_unchanged() {
    let mut generator = Generator::new();
    generator.add_dependency("ß", "*int", "{}").add_dependency("İx", "*int", "{}");

    let output = generator.render_to_string().unwrap();
    assert!(output.contains("type Container struct{\n\tß *int\n\tİx *int\n}\n\n"));

    assert!(output.contains("func (c *Container) Newß() *int {}\n"));
    assert!(output.contains("\tif c.ß == nil {\n\t\tc.ß = c.Newß()\n"));
    assert!(!output.contains("SS"), "unexpected expansion:\n{output}");

    assert!(output.contains("func (c *Container) Newİx() *int {}\n"));
    assert!(output.contains("\tif c.İx == nil {\n\t\tc.İx = c.Newİx()\n"));
    assert!(!output.contains('\u{307}'), "unexpected combining dot:\n{output}");
}

#[test]
fn test_upper_case_name_keeps_field_but_lowercases_accessor_check() {
    let mut generator = Generator::new();
    generator.add_dependency("Logger", "*Logger", "{ return &Logger{} }");

    let output = generator.render_to_string().unwrap();
    assert!(output.contains("\tLogger *Logger\n"));
    assert!(output.contains("\tif c.logger == nil {"));
    assert!(output.contains("func (c *Container) NewLogger() *Logger"));
}

#[test]
fn test_duplicate_names_are_rendered_as_given() {
    let mut generator = Generator::new();
    generator.add_dependency("x", "int", "{ return 1 }").add_dependency("x", "int", "{ return 2 }");

    let output = generator.render_to_string().unwrap();
    assert_eq!(count(&output, "\tx int\n"), 2);
    assert_eq!(count(&output, "func (c *Container) NewX() int"), 2);
}

#[test]
fn test_empty_name_is_rejected() {
    let mut generator = Generator::new();
    generator.add_dependency("", "int", "{ return 1 }");

    let err = generator.render_to_string().unwrap_err();
    assert!(matches!(
        err,
        GodicError::EmptyIdentifier {
            index: 0
        }
    ));
}
