/// The generation engine — seeded evaluation of heterogeneous node trees.
///
/// Every flavor-text generator in this crate is a `Generator` whose root
/// is a sequence of nodes: literal text, producer closures that expand
/// into further nodes, or embedded sub-generators with their own seeds.
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("seed {0} does not fit the supported range [0, 2^32)")]
    SeedOutOfRange(u64),
    #[error("producer nesting exceeded the maximum depth of {0}")]
    RecursionExhausted(usize),
    #[error("weighted choice has no selectable entry (zero or negative total weight)")]
    WeightedChoice,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Default cap on producer nesting depth. Content in this crate nests
/// producers three or four levels deep (adventurer → item → weapon →
/// etching); anything approaching this cap is a runaway provider.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// A producer closure: invoked once per occurrence during resolution,
/// returns a fresh node sequence to resolve in place. `FnMut` so content
/// code may carry private mutable state between occurrences.
pub type ProducerFn = Box<dyn FnMut(&mut StdRng) -> Result<Vec<Node>, GeneratorError>>;

/// One element of a generation tree.
pub enum Node {
    /// Contributes its text verbatim.
    Literal(String),
    /// Expands into a new node sequence when resolved.
    Producer(ProducerFn),
    /// A fully independent embedded generator, evaluated with its own
    /// seed and RNG.
    SubGenerator(Generator),
}

impl Node {
    pub fn lit(text: impl Into<String>) -> Node {
        Node::Literal(text.into())
    }

    /// Wrap an infallible closure as a producer node.
    pub fn producer<F>(mut f: F) -> Node
    where
        F: FnMut(&mut StdRng) -> Vec<Node> + 'static,
    {
        Node::Producer(Box::new(move |rng| Ok(f(rng))))
    }

    /// Wrap a fallible closure as a producer node.
    pub fn try_producer<F>(f: F) -> Node
    where
        F: FnMut(&mut StdRng) -> Result<Vec<Node>, GeneratorError> + 'static,
    {
        Node::Producer(Box::new(f))
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Node {
        Node::Literal(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Node {
        Node::Literal(text)
    }
}

impl From<Generator> for Node {
    fn from(g: Generator) -> Node {
        Node::SubGenerator(g)
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Node::Producer(_) => f.write_str("Producer(..)"),
            Node::SubGenerator(g) => f.debug_tuple("SubGenerator").field(&g.name).finish(),
        }
    }
}

/// ANSI highlighting for the report body, as the console tools expect.
const BODY_COLOR: &str = "\x1b[94m";
const RESET: &str = "\x1b[0m";

/// A seeded flavor-text generator.
///
/// The root tree is set at construction and never mutated by the engine.
/// Each `generate()` call builds a fresh `StdRng` from the stored seed
/// and threads it explicitly through resolution, so repeated calls on
/// the same instance reproduce the same output — unless a producer in
/// the tree carries its own mutable state across calls, which the
/// engine permits but does not reset.
pub struct Generator {
    name: String,
    seed: u32,
    root: Vec<Node>,
    max_depth: usize,
}

impl Generator {
    /// Construct with a time-derived seed, so unseeded runs differ from
    /// process to process.
    pub fn new(name: impl Into<String>, root: Vec<Node>) -> Generator {
        Generator {
            name: name.into(),
            seed: time_derived_seed(),
            root,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Construct with an explicit seed for reproducible generation.
    pub fn with_seed(
        name: impl Into<String>,
        root: Vec<Node>,
        seed: u64,
    ) -> Result<Generator, GeneratorError> {
        let mut g = Generator::new(name, root);
        g.reseed(seed)?;
        Ok(g)
    }

    /// Override the producer nesting cap.
    pub fn max_depth(mut self, depth: usize) -> Generator {
        self.max_depth = depth;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replace the seed ahead of the next `generate()` call.
    pub fn reseed(&mut self, seed: u64) -> Result<(), GeneratorError> {
        if seed > u32::MAX as u64 {
            return Err(GeneratorError::SeedOutOfRange(seed));
        }
        self.seed = seed as u32;
        Ok(())
    }

    /// Evaluate the root tree into a single string.
    ///
    /// Resolution is strictly left-to-right: literals append verbatim,
    /// producers expand in place, sub-generators contribute their own
    /// `generate()` output. The RNG is private to this call; embedded
    /// sub-generators draw from their own seeds and leave the parent's
    /// draw sequence untouched.
    pub fn generate(&mut self) -> Result<String, GeneratorError> {
        let mut rng = StdRng::seed_from_u64(self.seed as u64);
        let mut out = String::new();
        for node in self.root.iter_mut() {
            resolve_into(node, &mut rng, &mut out, self.max_depth)?;
        }
        Ok(out)
    }

    /// Generate and write one report block — name, seed, body — to `out`.
    ///
    /// Propagates generation failures without writing anything, so a
    /// caller can tell "no output" from "malformed output".
    pub fn report_to<W: Write>(&mut self, out: &mut W) -> Result<(), GeneratorError> {
        let body = self.generate()?;
        writeln!(out, "{} @ {}:", self.name, self.seed)?;
        writeln!(out, "{BODY_COLOR}{body}{RESET}")?;
        Ok(())
    }

    /// Generate and report to standard output.
    pub fn generate_and_report(&mut self) -> Result<(), GeneratorError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.report_to(&mut lock)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name)
            .field("seed", &self.seed)
            .field("nodes", &self.root.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Resolve one root node into `out`.
///
/// Produced sequences are expanded through an explicit work-list of
/// `(node, depth)` frames rather than call-stack recursion, so runaway
/// producer chains fail with `RecursionExhausted` instead of
/// overflowing the stack.
fn resolve_into(
    node: &mut Node,
    rng: &mut StdRng,
    out: &mut String,
    max_depth: usize,
) -> Result<(), GeneratorError> {
    match node {
        Node::Literal(text) => out.push_str(text),
        Node::SubGenerator(g) => out.push_str(&g.generate()?),
        Node::Producer(f) => {
            let produced = f(rng)?;
            let mut stack: Vec<(Node, usize)> =
                produced.into_iter().rev().map(|n| (n, 1)).collect();
            while let Some((node, depth)) = stack.pop() {
                match node {
                    Node::Literal(text) => out.push_str(&text),
                    Node::SubGenerator(mut g) => out.push_str(&g.generate()?),
                    Node::Producer(mut f) => {
                        if depth >= max_depth {
                            return Err(GeneratorError::RecursionExhausted(max_depth));
                        }
                        let produced = f(rng)?;
                        stack.extend(produced.into_iter().rev().map(|n| (n, depth + 1)));
                    }
                }
            }
        }
    }
    Ok(())
}

fn time_derived_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(0)
}
