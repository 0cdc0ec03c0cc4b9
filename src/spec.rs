//! Static option table and alias lookup.
//!
//! One declarative [`OptionSpec`] entry per option keeps aliases, arity,
//! value type and the mandatory marker co-located, so dispatch, the
//! option-lookalike guard and mandatory enforcement all read from the same
//! table.

/// Value shape of an option. Arity falls out of the kind: `Flag` consumes
/// no value token, `ManyU32` consumes one per occurrence and may repeat,
/// everything else consumes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Flag,
    Int16,
    Float32,
    Str,
    ManyU32,
}

impl OptionKind {
    /// Whether the option consumes a following value token.
    pub fn takes_value(self) -> bool {
        !matches!(self, OptionKind::Flag)
    }

    /// Whether a following token that spells a known option is refused as
    /// a value. String values take any token verbatim; numeric and
    /// repeated values do not. The asymmetry is deliberate.
    pub fn refuses_option_lookalike(self) -> bool {
        matches!(
            self,
            OptionKind::Int16 | OptionKind::Float32 | OptionKind::ManyU32
        )
    }
}

/// Compiled-in description of one recognized option.
#[derive(Debug)]
pub struct OptionSpec {
    /// Canonical field name, used in the missing-mandatory report.
    pub name: &'static str,
    /// Public spellings, shown in help.
    pub aliases: &'static [&'static str],
    /// Accepted but deliberately absent from help (deprecated spellings).
    pub hidden_aliases: &'static [&'static str],
    pub kind: OptionKind,
    pub mandatory: bool,
}

impl OptionSpec {
    fn matches(&self, token: &str) -> bool {
        self.aliases.iter().chain(self.hidden_aliases).any(|a| *a == token)
    }
}

/// Help spellings, handled before the table is consulted.
pub const HELP_ALIASES: [&str; 2] = ["-h", "--help"];

/// Every recognized option, in display and report order.
pub static OPTIONS: [OptionSpec; 6] = [
    OptionSpec {
        name: "some",
        aliases: &["-s", "--some"],
        hidden_aliases: &[],
        kind: OptionKind::Flag,
        mandatory: true,
    },
    OptionSpec {
        name: "verbose",
        aliases: &["-v", "--verbose"],
        hidden_aliases: &[],
        kind: OptionKind::Flag,
        mandatory: true,
    },
    OptionSpec {
        name: "param",
        aliases: &["-p", "--param"],
        hidden_aliases: &["--omg"],
        kind: OptionKind::Int16,
        mandatory: true,
    },
    OptionSpec {
        name: "float_value",
        aliases: &["-f", "--float-value"],
        hidden_aliases: &[],
        kind: OptionKind::Float32,
        mandatory: true,
    },
    OptionSpec {
        name: "str",
        aliases: &["--str"],
        hidden_aliases: &[],
        kind: OptionKind::Str,
        mandatory: true,
    },
    OptionSpec {
        name: "many_values",
        aliases: &["-m", "--many-values"],
        hidden_aliases: &[],
        kind: OptionKind::ManyU32,
        mandatory: true,
    },
];

/// Fixed usage text. Hidden aliases are not listed.
pub const USAGE: &str = "\
Usage: flatargs [OPTIONS]

Options:
    -h, --help
    -s, --some
    -v, --verbose
    -p, --param <PARAM>
    -f, --float-value <FLOAT_VALUE>
    --str <STR>
    -m, --many-values <MANY_VALUES>
";

/// Look up the option a token selects, hidden aliases included.
pub fn find(token: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.matches(token))
}

/// Whether a token spells any recognized option, help included. Used to
/// refuse an option as the value of a value-taking option.
pub fn is_option_token(token: &str) -> bool {
    HELP_ALIASES.contains(&token) || find(token).is_some()
}
