//! Set brackets

use crate::decor::category::Category;
use crate::decor::guard::GuardSpec;
use crate::decor::rules::{RuleCompiler, RuleDecl, StaticRule};

const NOT_BAR: GuardSpec = GuardSpec::not(r"\|");

/// `[| ... |]` as white square brackets
pub fn bracket_rules(compiler: &mut RuleCompiler<'_>) -> Vec<StaticRule> {
    let decls = [
        RuleDecl::literal(Category::Set, "[|", "⟦"),
        RuleDecl::literal(Category::Set, "|]", "⟧"),
        RuleDecl::literal(Category::Set, "[", "[").map(|decl| decl.after(NOT_BAR)),
        RuleDecl::literal(Category::Set, "]", "]").map(|decl| decl.before(NOT_BAR)),
    ];
    decls
        .into_iter()
        .filter_map(|decl| compiler.compile_result(decl))
        .collect()
}
