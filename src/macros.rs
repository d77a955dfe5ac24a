#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a [`Rule`](crate::Rule).
///
/// `tag` is an anchored regex over the 9-slot morphology tag, `requires` a
/// [`TokenTraits`](crate::engine::TokenTraits) mask the token must carry before
/// the production runs. The production may return anything implementing
/// [`IntoAnnotation`](crate::IntoAnnotation) (a single `Marker` or a whole
/// `Annotation`).
#[macro_export]
macro_rules! rule {
    (
        name: $name:expr
        $(, tag: $tag:literal)?
        $(, requires: $requires:expr)?
        , prod: |$word:ident : &$word_ty:ty| -> $ret_ty:ty $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            tag: { None $(.or(Some($crate::regex!($tag))))? },
            requires: { 0 $(| $requires)? },
            production: Box::new(move |$word: &$word_ty| {
                use $crate::IntoAnnotation;
                let result: $ret_ty = $body;
                result.and_then(|v| v.into_annotation())
            }),
        }
    }};
}
