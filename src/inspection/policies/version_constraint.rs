//! Composer-style version constraints.
//!
//! A constraint is a whitespace (or comma) separated conjunction of
//! comparators such as `>=2.0.0 <2.1.0`, `^1.2`, `~1.2.3` or `1.0.*`.
//! Disjunctions (`|`) are split by the caller, one clause at a time.
//!
//! Versions order the way Composer orders them: four numeric components,
//! then the stability `dev < alpha < beta < RC < stable < patch`, then the
//! number trailing the stability label. A `<X` or `>=X` bound written
//! without a stability suffix reaches down to `X-dev`.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Stability {
    Dev,
    Alpha,
    Beta,
    Rc,
    Stable,
    /// `-p1`, `-pl1` and `-patch1` releases sort after the plain release
    Patch,
}

impl Stability {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "dev" => Some(Stability::Dev),
            "alpha" | "a" => Some(Stability::Alpha),
            "beta" | "b" => Some(Stability::Beta),
            "rc" => Some(Stability::Rc),
            "stable" => Some(Stability::Stable),
            "patch" | "pl" | "p" => Some(Stability::Patch),
            _ => None,
        }
    }
}

/// A normalized Composer version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerVersion {
    numbers: [u64; 4],
    stability: Stability,
    stability_number: u64,
}

impl ComposerVersion {
    fn release(numbers: [u64; 4]) -> Self {
        Self {
            numbers,
            stability: Stability::Stable,
            stability_number: 0,
        }
    }

    fn into_dev(self) -> Self {
        Self {
            stability: Stability::Dev,
            stability_number: 0,
            ..self
        }
    }
}

impl Ord for ComposerVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numbers
            .cmp(&other.numbers)
            .then(self.stability.cmp(&other.stability))
            .then(self.stability_number.cmp(&other.stability_number))
    }
}

impl PartialOrd for ComposerVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl Op {
    fn holds(self, installed: &ComposerVersion, bound: &ComposerVersion) -> bool {
        match self {
            Op::Lt => installed < bound,
            Op::Le => installed <= bound,
            Op::Gt => installed > bound,
            Op::Ge => installed >= bound,
            Op::Eq => installed == bound,
            Op::Ne => installed != bound,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Bound {
    op: Op,
    version: ComposerVersion,
}

impl Bound {
    fn new(op: Op, version: ComposerVersion) -> Self {
        Self { op, version }
    }

    /// Builds a bound from a written version. `<X` and `>=X` without a
    /// stability suffix are widened to `X-dev`.
    fn written(op: Op, parsed: ParsedVersion) -> Self {
        let version = match op {
            Op::Lt | Op::Ge if !parsed.explicit_stability => parsed.version.into_dev(),
            _ => parsed.version,
        };
        Self::new(op, version)
    }

    /// Upper bound of a computed range: `<X-dev`.
    fn below(numbers: [u64; 4]) -> Self {
        Self::new(Op::Lt, ComposerVersion::release(numbers).into_dev())
    }
}

/// A single range clause. An empty bound list matches every version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionConstraint {
    bounds: Vec<Bound>,
}

impl VersionConstraint {
    /// Parses one clause; `None` when any part of it cannot be understood.
    pub fn parse(clause: &str) -> Option<Self> {
        let tokens = join_operators(clause);
        if tokens.is_empty() {
            return None;
        }

        let mut bounds = Vec::new();
        let mut index = 0;
        while index < tokens.len() {
            // Hyphen range: `1.0 - 2.0`
            if tokens.get(index + 1).map(String::as_str) == Some("-") {
                let lower = parse_parts(&tokens[index])?;
                let upper = parse_parts(tokens.get(index + 2)?)?;
                bounds.push(Bound::written(Op::Ge, lower));
                bounds.push(hyphen_upper_bound(upper));
                index += 3;
                continue;
            }

            bounds.extend(parse_comparator(&tokens[index])?);
            index += 1;
        }

        Some(Self { bounds })
    }

    pub fn matches(&self, version: &ComposerVersion) -> bool {
        self.bounds
            .iter()
            .all(|bound| bound.op.holds(version, &bound.version))
    }

    /// Whether the raw installed version string satisfies this constraint.
    /// Branch versions (`dev-main`) never do.
    pub fn satisfied_by(&self, version: &str) -> bool {
        normalize_version(version).is_some_and(|version| self.matches(&version))
    }
}

/// Returns true when `version` satisfies the range `clause`.
pub fn satisfies(version: &str, clause: &str) -> bool {
    VersionConstraint::parse(clause).is_some_and(|constraint| constraint.satisfied_by(version))
}

/// Normalizes a Composer version (`v1.2`, `1.2.3.0`, `2.0.0-RC1`, `2.4.3-p1`).
pub fn normalize_version(raw: &str) -> Option<ComposerVersion> {
    parse_parts(raw).map(|parsed| parsed.version)
}

struct ParsedVersion {
    version: ComposerVersion,
    /// Number of numeric components written out
    precision: usize,
    explicit_stability: bool,
}

fn parse_parts(raw: &str) -> Option<ParsedVersion> {
    let raw = raw.trim();
    if raw.starts_with("dev-") {
        return None;
    }
    let raw = raw
        .strip_prefix('v')
        .or_else(|| raw.strip_prefix('V'))
        .unwrap_or(raw);
    let raw = raw.split('+').next().unwrap_or(raw);

    let split = raw
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(raw.len());
    let (core, suffix) = raw.split_at(split);
    let core = if suffix.is_empty() {
        core
    } else {
        core.strip_suffix('.').unwrap_or(core)
    };

    let parts = core
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;
    if parts.is_empty() || parts.len() > 4 {
        return None;
    }

    let mut numbers = [0; 4];
    numbers[..parts.len()].copy_from_slice(&parts);
    let mut version = ComposerVersion::release(numbers);

    if !suffix.is_empty() {
        let (stability, stability_number) = parse_stability(suffix)?;
        version.stability = stability;
        version.stability_number = stability_number;
    }

    Some(ParsedVersion {
        version,
        precision: parts.len(),
        explicit_stability: !suffix.is_empty(),
    })
}

/// Parses a suffix such as `-RC1`, `beta.2`, `-p1` or `-dev`.
fn parse_stability(suffix: &str) -> Option<(Stability, u64)> {
    const LABELS: [&str; 10] = [
        "stable", "patch", "alpha", "beta", "dev", "rc", "pl", "a", "b", "p",
    ];

    let suffix = suffix.trim_start_matches(['-', '.', '_']).to_ascii_lowercase();
    let label = LABELS.iter().find(|label| suffix.starts_with(*label))?;
    let stability = Stability::from_label(label)?;

    let rest = suffix[label.len()..].trim_start_matches(['-', '.', '_']);
    if rest.is_empty() {
        return Some((stability, 0));
    }
    if matches!(rest, "dev") {
        return Some((Stability::Dev, 0));
    }
    rest.parse::<u64>().ok().map(|number| (stability, number))
}

/// Splits a clause into tokens, gluing a dangling operator to the version
/// that follows it (`>= 1.0` becomes `>=1.0`).
fn join_operators(clause: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending = String::new();

    for token in clause.split(|c: char| c.is_whitespace() || c == ',') {
        if token.is_empty() {
            continue;
        }
        if token.chars().all(|c| "<>=!^~".contains(c)) {
            pending.push_str(token);
            continue;
        }
        tokens.push(format!("{}{}", pending, token));
        pending.clear();
    }

    if !pending.is_empty() {
        tokens.push(pending);
    }
    tokens
}

fn parse_comparator(token: &str) -> Option<Vec<Bound>> {
    const OPERATORS: [(&str, Option<Op>); 10] = [
        ("<=", Some(Op::Le)),
        (">=", Some(Op::Ge)),
        ("==", Some(Op::Eq)),
        ("!=", Some(Op::Ne)),
        ("<>", Some(Op::Ne)),
        ("<", Some(Op::Lt)),
        (">", Some(Op::Gt)),
        ("=", Some(Op::Eq)),
        ("^", None),
        ("~", None),
    ];

    let (prefix, op, rest) = OPERATORS
        .iter()
        .find_map(|(prefix, op)| token.strip_prefix(prefix).map(|rest| (*prefix, *op, rest)))
        .unwrap_or(("", Some(Op::Eq), token));

    if rest.is_empty() {
        return None;
    }

    if is_wildcard(rest) {
        return match op {
            Some(Op::Eq) => wildcard_bounds(rest),
            _ => None,
        };
    }

    let parsed = parse_parts(rest)?;
    match (prefix, op) {
        ("^", _) => Some(caret_bounds(parsed)),
        ("~", _) => Some(tilde_bounds(parsed)),
        (_, Some(op)) => Some(vec![Bound::written(op, parsed)]),
        _ => None,
    }
}

fn is_wildcard(version: &str) -> bool {
    version
        .split('.')
        .any(|part| part == "*" || part.eq_ignore_ascii_case("x"))
}

/// `*` matches anything; `1.2.*` means `>=1.2.0-dev <1.3.0-dev`.
fn wildcard_bounds(version: &str) -> Option<Vec<Bound>> {
    let fixed = version
        .split('.')
        .take_while(|part| *part != "*" && !part.eq_ignore_ascii_case("x"))
        .map(|part| part.trim_start_matches('v').parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let (lower, upper) = match fixed.as_slice() {
        [] => return Some(Vec::new()),
        [major] => ([*major, 0, 0, 0], [major + 1, 0, 0, 0]),
        [major, minor] => ([*major, *minor, 0, 0], [*major, minor + 1, 0, 0]),
        [major, minor, patch, ..] => ([*major, *minor, *patch, 0], [*major, *minor, patch + 1, 0]),
    };

    Some(vec![
        Bound::new(Op::Ge, ComposerVersion::release(lower).into_dev()),
        Bound::below(upper),
    ])
}

/// An upper bound written with every component is inclusive; a partial one
/// (`2.0`) covers the whole `2.0.*` line.
fn hyphen_upper_bound(parsed: ParsedVersion) -> Bound {
    let [major, minor, ..] = parsed.version.numbers;
    match parsed.precision {
        1 => Bound::below([major + 1, 0, 0, 0]),
        2 => Bound::below([major, minor + 1, 0, 0]),
        _ => Bound::new(Op::Le, parsed.version),
    }
}

/// `^1.2.3` means `>=1.2.3 <2.0.0`; with a zero major the next non-zero
/// component is the one that may not change.
fn caret_bounds(parsed: ParsedVersion) -> Vec<Bound> {
    let [major, minor, patch, _] = parsed.version.numbers;

    let upper = if major > 0 || parsed.precision == 1 {
        [major + 1, 0, 0, 0]
    } else if minor > 0 || parsed.precision == 2 {
        [0, minor + 1, 0, 0]
    } else {
        [0, 0, patch + 1, 0]
    };

    vec![Bound::written(Op::Ge, parsed), Bound::below(upper)]
}

/// `~1.2` means `>=1.2.0 <2.0.0`; `~1.2.3` means `>=1.2.3 <1.3.0`.
fn tilde_bounds(parsed: ParsedVersion) -> Vec<Bound> {
    let [major, minor, patch, _] = parsed.version.numbers;

    let upper = match parsed.precision {
        1 | 2 => [major + 1, 0, 0, 0],
        3 => [major, minor + 1, 0, 0],
        _ => [major, minor, patch + 1, 0],
    };

    vec![Bound::written(Op::Ge, parsed), Bound::below(upper)]
}
