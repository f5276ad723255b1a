//! The argument parser used by endpoint methods.
//!
//! Endpoint methods accept their required arguments either positionally,
//!
//! ```ignore
//! parser.parse([Arg::from("octocat"), Arg::from("hello-world")])?;
//! ```
//!
//! or inside a trailing options mapping,
//!
//! ```ignore
//! parser.parse([Options::new().with("user", "octocat").with("repo", "hello-world")])?;
//! ```
//!
//! In both cases the required values end up bound on the request context and
//! whatever options remain become the canonical parameter mapping.

use serde_json::Value;
use tracing::{debug, trace};

use super::args::{Arg, extract_options};
use crate::config::ParserConfig;
use crate::context::RequestContext;
use crate::error::{ArgumentError, Result};
use crate::filter::{assert_required_keys, filter};
use crate::normalizer::Params;
use crate::validations::{assert_presence, assert_presence_of, assert_presence_of_all};

/// Parses endpoint arguments and binds required ones onto a request context.
pub struct ArgumentParser<'a, C: RequestContext + ?Sized> {
    /// Request the required arguments are bound onto
    context: &'a mut C,

    /// Arguments that must be present before the request is fired
    args_required: Vec<String>,

    /// Parameters passed to the request
    params: Params,
}

impl<'a, C: RequestContext + ?Sized> ArgumentParser<'a, C> {
    /// Create a parser binding `config.args_required` onto `context`.
    pub fn new(context: &'a mut C, config: ParserConfig) -> Self {
        Self {
            context,
            args_required: config.args_required,
            params: Params::new(),
        }
    }

    /// Create a parser from a plain list of required names.
    pub fn with_required<I, S>(context: &'a mut C, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(context, ParserConfig::required(names))
    }

    /// Canonical parameters from the last `parse`.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Consume the parser, keeping only its canonical parameters.
    pub fn into_params(self) -> Params {
        self.params
    }

    /// Required names in positional order.
    pub fn required_arguments(&self) -> &[String] {
        &self.args_required
    }

    /// The request context required arguments are bound onto.
    pub fn context(&self) -> &C {
        &*self.context
    }

    /// Parse arguments given positionally or as a trailing options mapping.
    ///
    /// Positional arguments are bound in order onto the required names. With
    /// no positional arguments, required names are pulled out of the options
    /// instead. Either way required names never stay in the options, and the
    /// remaining options replace `params`. A failed parse leaves `params` empty.
    pub fn parse<I, A>(&mut self, args: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
    {
        self.params.clear();
        let split = extract_options(args.into_iter().map(Into::into).collect());
        let mut options = split.options.normalize();

        if split.positional.is_empty() {
            self.parse_options(&mut options)?;
        } else {
            self.parse_arguments(split.positional, &mut options)?;
        }

        trace!("Canonical params: {:?}", options);
        self.params = options;
        Ok(self)
    }

    /// Like [`parse`](Self::parse), then hands the parser to `callback`.
    pub fn parse_with<I, A, F>(&mut self, args: I, callback: F) -> Result<&mut Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg>,
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.parse(args)?;
        callback(&mut *self)?;
        Ok(self)
    }

    /// Drop every param not in `keys`. Empty `keys` keeps everything.
    pub fn sift<S: AsRef<str>>(&mut self, keys: &[S]) -> &mut Self {
        filter(keys, &mut self.params);
        self
    }

    /// Fail unless every name in `required` is a key of `params`.
    pub fn assert_required<S: AsRef<str>>(&mut self, required: &[S]) -> Result<&mut Self> {
        assert_required_keys(required, &self.params)?;
        Ok(self)
    }

    fn parse_arguments(&mut self, args: Vec<Value>, options: &mut Params) -> Result<()> {
        debug!(
            "Binding {} positional arguments onto {:?}",
            args.len(),
            self.args_required
        );
        assert_presence_of(&args)?;

        let got = args.len();
        // Arguments past the required list are not bound here.
        for (name, arg) in self.args_required.iter().zip(args) {
            self.context.set(name, arg)?;
        }
        self.check_requirement(got)?;

        // Positional values win over same-named options.
        for name in &self.args_required {
            if options.remove(name).is_some() {
                trace!("Dropping option {} already bound positionally", name);
            }
        }
        Ok(())
    }

    fn parse_options(&mut self, options: &mut Params) -> Result<()> {
        for name in &self.args_required {
            if let Some(value) = options.remove(name) {
                assert_presence(&value)?;
                trace!("Binding required option {}", name);
                self.context.set(name, value)?;
            }
        }
        self.check_assignment()
    }

    /// Every required name must now be bound, possibly by an earlier call.
    fn check_assignment(&mut self) -> Result<()> {
        let mut bound = Params::new();
        for name in &self.args_required {
            if !self.context.has(name) {
                self.context.set(name, Value::String(String::new()))?;
            }
            bound.insert(name.clone(), self.context.get(name).unwrap_or(Value::Null));
        }
        assert_presence_of_all(&bound)
    }

    fn check_requirement(&self, got: usize) -> Result<()> {
        let expected = self.args_required.len();
        if got < expected {
            return Err(ArgumentError::Arity { got, expected });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Bindings;
    use crate::normalizer::{Key, Options};
    use serde_json::json;

    #[test]
    fn positional_arguments_bind_in_order() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user", "repo"]);
        parser.parse(["octocat", "hello-world"]).unwrap();
        assert!(parser.params().is_empty());

        assert_eq!(ctx.get("user"), Some(json!("octocat")));
        assert_eq!(ctx.get("repo"), Some(json!("hello-world")));
    }

    #[test]
    fn too_few_positional_arguments() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user", "repo"]);
        let err = parser.parse(["octocat"]).err().unwrap();
        assert!(matches!(err, ArgumentError::Arity { got: 1, expected: 2 }));
    }

    #[test]
    fn blank_positional_binds_nothing() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user", "repo"]);
        let err = parser.parse(["octocat", ""]).err().unwrap();
        assert!(matches!(err, ArgumentError::Presence { index: Some(1) }));
        assert!(ctx.is_empty());
    }

    #[test]
    fn extra_positional_arguments_are_ignored() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        parser.parse(["octocat", "extra"]).unwrap();
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn positional_with_trailing_options() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        parser
            .parse([
                Arg::from("octocat"),
                Arg::from(Options::new().with(Key::symbol("per_page"), 30)),
            ])
            .unwrap();
        assert_eq!(parser.params()["per_page"], json!(30));
        assert_eq!(ctx.get("user"), Some(json!("octocat")));
    }

    #[test]
    fn positional_binding_drops_same_named_option() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        parser
            .parse([
                Arg::from("octocat"),
                Arg::from(Options::new().with(Key::symbol("user"), "other").with("page", 2)),
            ])
            .unwrap();
        assert!(!parser.params().contains_key("user"));
        assert_eq!(Value::Object(parser.params().clone()), json!({ "page": 2 }));
        assert_eq!(ctx.get("user"), Some(json!("octocat")));
    }

    #[test]
    fn failed_parse_clears_previous_params() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        parser
            .parse([Options::new().with("user", "octocat").with("stale", 1)])
            .unwrap();
        assert!(parser.parse(["   "]).is_err());
        assert!(parser.params().is_empty());
    }

    #[test]
    fn required_options_move_onto_context() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["name"]);
        parser
            .parse([Options::new().with(Key::symbol("name"), "x").with("other", "y")])
            .unwrap();
        assert_eq!(Value::Object(parser.params().clone()), json!({ "other": "y" }));
        assert_eq!(ctx.get("name"), Some(json!("x")));
    }

    #[test]
    fn missing_required_option() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user", "repo"]);
        let err = parser
            .parse([Options::new().with("user", "octocat")])
            .err()
            .unwrap();
        match err {
            ArgumentError::MissingArgument(keys) => assert_eq!(keys, vec!["repo"]),
            other => panic!("unexpected error: {:?}", other),
        }
        // A placeholder is left behind for the unbound name.
        assert_eq!(ctx.get("repo"), Some(json!("")));
    }

    #[test]
    fn blank_required_option_is_rejected() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        let err = parser.parse([Options::new().with("user", " ")]).err().unwrap();
        assert!(matches!(err, ArgumentError::Presence { index: None }));
    }

    #[test]
    fn earlier_binding_satisfies_requirement() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["name"]);
        parser.parse([Options::new().with("name", "x")]).unwrap();
        parser.parse([Options::new()]).unwrap();
        parser.parse(Vec::<Arg>::new()).unwrap();
        assert_eq!(parser.context().get("name"), Some(json!("x")));
    }

    #[test]
    fn params_are_replaced_each_parse() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, Vec::<String>::new());
        parser.parse([Options::new().with("a", 1)]).unwrap();
        parser.parse([Options::new().with("b", 2)]).unwrap();
        assert_eq!(Value::Object(parser.params().clone()), json!({ "b": 2 }));
    }

    #[test]
    fn sift_and_assert_required_chain() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, Vec::<String>::new());
        parser
            .parse([Options::new().with("a", 1).with("b", 2)])
            .unwrap()
            .sift(&["a"])
            .assert_required(&["a"])
            .unwrap();
        assert_eq!(Value::Object(parser.params().clone()), json!({ "a": 1 }));

        let err = parser.assert_required(&["missing"]).err().unwrap();
        assert!(matches!(err, ArgumentError::MissingArgument(ref keys) if keys == &["missing"]));
    }

    #[test]
    fn callback_receives_parser() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, ["user"]);
        let mut seen = Vec::new();
        parser
            .parse_with([Options::new().with("user", "octocat").with("page", 1)], |p| {
                seen.extend(p.params().keys().cloned());
                p.sift(&["page"]).assert_required(&["page"])?;
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec!["page"]);
    }

    #[test]
    fn callback_errors_propagate() {
        let mut ctx = Bindings::new();
        let mut parser = ArgumentParser::with_required(&mut ctx, Vec::<String>::new());
        let result = parser.parse_with([Options::new()], |p| {
            p.assert_required(&["body"])?;
            Ok(())
        });
        assert!(matches!(result, Err(ArgumentError::MissingArgument(_))));
    }
}
