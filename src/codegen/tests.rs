use super::*;
use crate::fmt::{Canonical, FormatError, FormatResult};
use crate::model::{Interface, Method, Type};

const GREETER_MOCK: &[&str] = &[
    "// Code generated by mockgen. DO NOT EDIT.",
    "// Source: greeter.go",
    "",
    "package mocks",
    "",
    "import (",
    "\tpegomock \"github.com/petergtz/pegomock\"",
    "\treflect \"reflect\"",
    ")",
    "",
    "// Mock of Greeter interface",
    "type MockGreeter struct {",
    "\tfail pegomock.FailHandler",
    "}",
    "",
    "func NewMockGreeter() *MockGreeter {",
    "\treturn NewMockGreeterWithFailHandler(pegomock.GlobalFailHandler)",
    "}",
    "",
    "func NewMockGreeterWithFailHandler(fail pegomock.FailHandler) *MockGreeter {",
    "\treturn &MockGreeter{fail: fail}",
    "}",
    "",
    "func (mock *MockGreeter) Greet(name string) string {",
    "\tparams := []pegomock.Param{name}",
    "\tresult := pegomock.GetGenericMockFrom(mock).Invoke(\"Greet\", params, false, []reflect.Type{reflect.TypeOf((*string)(nil)).Elem()})",
    "\tvar ret0 string",
    "\tif len(result) != 0 {",
    "\t\tif r, ok := result[0].(string); ok {",
    "\t\t\tret0 = r",
    "\t\t}",
    "\t}",
    "\treturn ret0",
    "}",
    "",
    "type VerifierGreeter struct {",
    "\tmock                   *MockGreeter",
    "\tinvocationCountMatcher pegomock.Matcher",
    "\tinOrderContext         *pegomock.InOrderContext",
    "}",
    "",
    "func (mock *MockGreeter) VerifyWasCalledOnce() *VerifierGreeter {",
    "\treturn &VerifierGreeter{mock: mock, invocationCountMatcher: pegomock.Times(1), inOrderContext: nil}",
    "}",
    "",
    "func (mock *MockGreeter) VerifyWasCalled(invocationCountMatcher pegomock.Matcher) *VerifierGreeter {",
    "\treturn &VerifierGreeter{mock: mock, invocationCountMatcher: invocationCountMatcher, inOrderContext: nil}",
    "}",
    "",
    "func (mock *MockGreeter) VerifyWasCalledInOrder(invocationCountMatcher pegomock.Matcher, inOrderContext *pegomock.InOrderContext) *VerifierGreeter {",
    "\treturn &VerifierGreeter{mock: mock, invocationCountMatcher: invocationCountMatcher, inOrderContext: inOrderContext}",
    "}",
    "",
    "func (verifier *VerifierGreeter) Greet(name string) *Greeter_Greet_OngoingVerification {",
    "\tparams := []pegomock.Param{name}",
    "\tpegomock.GetGenericMockFrom(verifier.mock).Verify(verifier.inOrderContext, verifier.invocationCountMatcher, \"Greet\", params, false)",
    "\treturn &Greeter_Greet_OngoingVerification{mock: verifier.mock}",
    "}",
    "",
    "type Greeter_Greet_OngoingVerification struct {",
    "\tmock *MockGreeter",
    "}",
    "",
    "func (c *Greeter_Greet_OngoingVerification) GetCapturedArguments() string {",
    "\t_param0 := c.GetAllCapturedArguments()",
    "\treturn _param0[len(_param0)-1]",
    "}",
    "",
    "func (c *Greeter_Greet_OngoingVerification) GetAllCapturedArguments() (_param0 []string) {",
    "\tparams := pegomock.GetGenericMockFrom(c.mock).GetInvocationParams(\"Greet\")",
    "\tif len(params) > 0 {",
    "\t\t_param0 = make([]string, len(params[0]))",
    "\t\tfor u, param := range params[0] {",
    "\t\t\tif v, ok := param.(string); ok {",
    "\t\t\t\t_param0[u] = v",
    "\t\t\t}",
    "\t\t}",
    "\t}",
    "\treturn",
    "}",
];

fn greeter_package() -> Package {
    let mut pkg = Package::new("foo");
    pkg.interfaces.push(Interface::new(
        "Greeter",
        vec![Method::new("Greet")
            .param("name", Type::predeclared("string"))
            .returns(Type::predeclared("string"))],
    ));
    pkg
}

fn generate(pkg: &Package) -> String {
    generate_output(pkg, &GenerateOptions::new("mocks", "greeter.go"), &Canonical).unwrap()
}

/// Extract the declaration starting with `prefix`, up to its closing brace.
fn decl<'a>(source: &'a str, prefix: &str) -> &'a str {
    let start = source
        .find(prefix)
        .unwrap_or_else(|| panic!("no declaration '{}' in:\n{}", prefix, source));
    let end = source[start..]
        .find("\n}\n")
        .map(|i| start + i + 3)
        .unwrap_or(source.len());
    &source[start..end]
}

struct Rejecting;

impl SourceFormatter for Rejecting {
    fn format(&self, _source: &str) -> Result<FormatResult, FormatError> {
        Err(FormatError::Syntax("3:1: expected declaration".to_string()))
    }
}

// === End to end ===

#[test]
fn greeter_end_to_end() {
    let expected = GREETER_MOCK.join("\n") + "\n";
    assert_eq!(generate(&greeter_package()), expected);
}

#[test]
fn output_is_deterministic() {
    let mut pkg = greeter_package();
    pkg.interfaces[0].methods.push(
        Method::new("Wave")
            .param("to", Type::named("example.com/people", "Person"))
            .param("r", Type::named("io", "Reader"))
            .returns(Type::named("context", "Context")),
    );
    let first = generate(&pkg);
    for _ in 0..5 {
        assert_eq!(generate(&pkg), first);
    }
}

#[test]
fn import_block_orders_runtime_first_then_paths_then_dot_imports() {
    let mut pkg = greeter_package();
    pkg.interfaces[0].methods.push(
        Method::new("Wave")
            .param("w", Type::named("io", "Writer"))
            .param("ctx", Type::named("context", "Context")),
    );
    pkg.dot_imports.push("example.com/dsl".to_string());

    let source = generate(&pkg);
    assert!(source.contains(
        "import (\n\
         \tpegomock \"github.com/petergtz/pegomock\"\n\
         \treflect \"reflect\"\n\
         \tcontext \"context\"\n\
         \tio \"io\"\n\
         \t. \"example.com/dsl\"\n\
         )\n"
    ));
}

#[test]
fn duplicate_basenames_get_distinct_aliases() {
    let mut pkg = Package::new("foo");
    pkg.interfaces.push(Interface::new(
        "Clock",
        vec![Method::new("Sync")
            .param("a", Type::named("example.com/a/util", "Time"))
            .param("b", Type::named("example.com/b/util", "Time"))],
    ));

    let source = generate(&pkg);
    assert!(source.contains("\tutil \"example.com/a/util\"\n"));
    assert!(source.contains("\tutil0 \"example.com/b/util\"\n"));
    assert!(source.contains("func (mock *MockClock) Sync(a util.Time, b util0.Time) {"));
}

#[test]
fn self_namespace_is_unqualified_and_not_imported() {
    let mut pkg = Package::new("foo");
    pkg.interfaces.push(Interface::new(
        "Store",
        vec![Method::new("Get").returns(Type::pointer(Type::named("example.com/foo", "Item")))],
    ));
    let mut options = GenerateOptions::new("foo", "store.go");
    options.self_package = Some("example.com/foo".to_string());

    let source = generate_output(&pkg, &options, &Canonical).unwrap();
    assert!(!source.contains("\"example.com/foo\""), "self import leaked:\n{}", source);
    assert!(source.contains("func (mock *MockStore) Get() *Item {"));
    assert!(source.contains("reflect.TypeOf((**Item)(nil)).Elem()"));
}

#[test]
fn self_namespace_reserves_an_alias_without_importing() {
    let mut pkg = Package::new("foo");
    pkg.interfaces.push(Interface::new(
        "Store",
        vec![Method::new("Get")
            .param("foo", Type::predeclared("string"))
            .returns(Type::pointer(Type::named("example.com/foo", "Item")))],
    ));
    let mut options = GenerateOptions::new("foo", "store.go");
    options.self_package = Some("example.com/foo".to_string());

    let aliases = resolve_aliases(&pkg, &options);
    assert_eq!(aliases.alias_of("example.com/foo"), Some("foo"));
    assert!(
        import_block(&pkg, &options, &aliases)
            .iter()
            .all(|import| import.path != "example.com/foo")
    );

    let source = generate_output(&pkg, &options, &Canonical).unwrap();
    assert!(source.contains("func (mock *MockStore) Get(_param0 string) *Item {"));
    assert!(!source.contains("example.com/foo"));
}

#[test]
fn explicit_imports_are_dropped_when_unreferenced() {
    let mut pkg = Package::new("shop");
    pkg.imports.insert("context".to_string());
    pkg.imports.insert("io".to_string());
    pkg.interfaces.push(Interface::new(
        "Cart",
        vec![Method::new("Dump").param("w", Type::named("io", "Writer"))],
    ));
    pkg.interfaces.push(Interface::new(
        "Checkout",
        vec![Method::new("Pay").param("ctx", Type::named("context", "Context"))],
    ));

    let cart_only =
        crate::loader::select_interfaces(pkg.clone(), "example.com/shop", &["Cart".to_string()])
            .unwrap();
    let source = generate(&cart_only);
    assert!(source.contains("\tio \"io\"\n"));
    assert!(!source.contains("\"context\""), "unused import emitted:\n{}", source);

    pkg.interfaces.clear();
    pkg.interfaces.push(Interface::new("Empty", vec![]));
    let source = generate(&pkg);
    assert!(!source.contains("\"io\""));
    assert!(!source.contains("\"context\""));
}

// === Signatures ===

#[test]
fn parameter_and_result_arity() {
    let mut pkg = Package::new("foo");
    pkg.interfaces.push(Interface::new(
        "Conn",
        vec![
            Method::new("Ping"),
            Method::new("Read")
                .param("buf", Type::slice(Type::predeclared("byte")))
                .param("off", Type::predeclared("int"))
                .returns(Type::predeclared("int"))
                .returns(Type::predeclared("error")),
        ],
    ));
    let source = generate(&pkg);

    let ping = decl(&source, "func (mock *MockConn) Ping() {");
    assert!(ping.contains(
        "\tpegomock.GetGenericMockFrom(mock).Invoke(\"Ping\", params, false, []reflect.Type{})\n"
    ));
    assert!(!ping.contains("return"));

    let read = decl(&source, "func (mock *MockConn) Read(");
    assert!(read.starts_with("func (mock *MockConn) Read(buf []byte, off int) (int, error) {"));
    assert!(read.contains("\tvar ret0 int\n\tvar ret1 error\n"));
    assert!(read.contains("if r, ok := result[1].(error); ok {"));
    assert!(read.contains("\treturn ret0, ret1\n"));

    let captured = decl(&source, "func (c *Conn_Ping_OngoingVerification) GetCapturedArguments()");
    assert_eq!(
        captured,
        "func (c *Conn_Ping_OngoingVerification) GetCapturedArguments() {\n}\n"
    );
    let all = decl(&source, "func (c *Conn_Ping_OngoingVerification) GetAllCapturedArguments()");
    assert_eq!(
        all,
        "func (c *Conn_Ping_OngoingVerification) GetAllCapturedArguments() {\n}\n"
    );
}

#[test]
fn variadic_parameters() {
    let mut pkg = Package::new("log");
    pkg.interfaces.push(Interface::new(
        "Logger",
        vec![Method::new("Printf")
            .param("format", Type::predeclared("string"))
            .variadic("args", Type::predeclared("interface{}"))],
    ));
    let source = generate(&pkg);

    let stub = decl(&source, "func (mock *MockLogger) Printf(");
    assert!(stub.starts_with("func (mock *MockLogger) Printf(format string, args ...interface{}) {"));
    assert!(stub.contains(
        "\tparams := []pegomock.Param{format}\n\
         \tfor _, param := range args {\n\
         \t\tparams = append(params, param)\n\
         \t}\n"
    ));
    assert!(stub.contains("Invoke(\"Printf\", params, true, []reflect.Type{})"));

    let verify = decl(&source, "func (verifier *VerifierLogger) Printf(");
    assert!(verify.contains("\"Printf\", params, true)"));

    let captured = decl(&source, "func (c *Logger_Printf_OngoingVerification) GetCapturedArguments()");
    assert!(captured.contains("GetCapturedArguments() (string, []interface{}) {"));
    assert!(captured.contains("\t_param0, _param1 := c.GetAllCapturedArguments()\n"));
    assert!(captured.contains("\treturn _param0[len(_param0)-1], _param1[len(_param1)-1]\n"));

    let all = decl(&source, "func (c *Logger_Printf_OngoingVerification) GetAllCapturedArguments()");
    assert!(all.contains("GetAllCapturedArguments() (_param0 []string, _param1 [][]interface{}) {"));
    assert!(all.contains(
        "\t\t_param1 = make([][]interface{}, len(params[0]))\n\
         \t\tfor u := range _param1 {\n\
         \t\t\t_param1[u] = make([]interface{}, 0, len(params)-1)\n\
         \t\t\tfor x := 1; x < len(params); x++ {\n\
         \t\t\t\tif u < len(params[x]) {\n\
         \t\t\t\t\tif v, ok := params[x][u].(interface{}); ok {\n\
         \t\t\t\t\t\t_param1[u] = append(_param1[u], v)\n"
    ));
    assert!(!all.contains("...interface{}"));
}

#[test]
fn unusable_parameter_names_are_positional() {
    let mut pkg = Package::new("kv");
    pkg.interfaces.push(Interface::new(
        "Store",
        vec![Method::new("Put")
            .param("params", Type::predeclared("int"))
            .param("", Type::predeclared("string"))
            .param("type", Type::predeclared("string"))
            .param("key", Type::predeclared("string"))
            .param("key", Type::predeclared("string"))
            .param("pegomock", Type::predeclared("bool"))],
    ));
    let source = generate(&pkg);
    assert!(source.contains(
        "func (mock *MockStore) Put(_param0 int, _param1 string, _param2 string, key string, _param4 string, _param5 bool) {"
    ));
    assert!(source.contains("[]pegomock.Param{_param0, _param1, _param2, key, _param4, _param5}"));
}

#[test]
fn parameters_never_shadow_unqualified_types() {
    let mut pkg = Package::new("store");
    pkg.interfaces.push(Interface::new(
        "Store",
        vec![
            Method::new("Put")
                .param("item", Type::named("example.com/store", "item"))
                .returns(Type::named("example.com/store", "item")),
            Method::new("Find")
                .param("Key", Type::slice(Type::named("", "Key")))
                .param("item", Type::predeclared("int")),
        ],
    ));
    let mut options = GenerateOptions::new("store", "store.go");
    options.self_package = Some("example.com/store".to_string());
    let source = generate_output(&pkg, &options, &Canonical).unwrap();

    let put = decl(&source, "func (mock *MockStore) Put(");
    assert!(put.starts_with("func (mock *MockStore) Put(_param0 item) item {"));
    assert!(put.contains("[]pegomock.Param{_param0}"));
    assert!(put.contains("reflect.TypeOf((*item)(nil)).Elem()"));
    assert!(put.contains("if r, ok := result[0].(item); ok {"));

    // Only names used by this method's own types are renamed.
    let find = decl(&source, "func (mock *MockStore) Find(");
    assert!(find.starts_with("func (mock *MockStore) Find(_param0 []Key, item int) {"));

    let verify = decl(&source, "func (verifier *VerifierStore) Put(");
    assert!(verify.starts_with("func (verifier *VerifierStore) Put(_param0 item) *Store_Put_OngoingVerification {"));
}

#[test]
fn custom_recorder_alias_and_fail_handler() {
    let mut options = GenerateOptions::new("mocks", "greeter.go");
    options.recorder = RecorderLibrary {
        import_path: "example.com/mocking/v2/recorder".to_string(),
        fail_handler_default: "PanicOnFailure".to_string(),
    };
    let source = generate_output(&greeter_package(), &options, &Canonical).unwrap();
    assert!(source.contains("\trecorder \"example.com/mocking/v2/recorder\"\n"));
    assert!(source.contains("return NewMockGreeterWithFailHandler(recorder.PanicOnFailure)"));
    assert!(!source.contains("pegomock"));
}

#[test]
fn empty_package_has_no_runtime_imports() {
    let source = generate(&Package::new("foo"));
    assert_eq!(
        source,
        "// Code generated by mockgen. DO NOT EDIT.\n// Source: greeter.go\n\npackage mocks\n"
    );
}

// === Errors ===

#[test]
fn embedded_interfaces_are_rejected() {
    let mut pkg = greeter_package();
    pkg.interfaces[0]
        .embedded
        .push(Type::named("io", "Closer"));
    let err = generate_source(&pkg, &GenerateOptions::new("mocks", "greeter.go")).unwrap_err();
    assert!(
        matches!(&err, GenerateError::EmbeddedInterface { interface, embedded }
            if interface == "Greeter" && embedded == "io.Closer"),
        "got {:?}",
        err
    );
}

#[test]
fn formatter_failure_carries_raw_text() {
    let err = generate_output(
        &greeter_package(),
        &GenerateOptions::new("mocks", "greeter.go"),
        &Rejecting,
    )
    .unwrap_err();
    match err {
        MockgenError::Format(failure) => {
            assert_eq!(failure.diagnostic, "syntax error: 3:1: expected declaration");
            assert!(failure.raw.contains("type MockGreeter struct {"));
        }
        other => panic!("expected a format failure, got {:?}", other),
    }
}
