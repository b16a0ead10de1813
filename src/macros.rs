// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression (literal, const or variable)
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Pull one scalar out of a JSON object, recording the dotted path if absent.
///
/// `pick!(picker, parent_node, "parent.path", "key")`
#[macro_export]
macro_rules! pick {
    ($p:expr, $node:expr, $at:expr, $key:literal) => {
        $p.scalar($node, $at, $key)
    };
}
