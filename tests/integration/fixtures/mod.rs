// Test documents with known sentence counts

/// Twenty sentences in four paragraphs, three of them opened by section markers.
/// Sentence 16 carries a detached possessive (`compiler 's`).
pub const TWENTY_SENTENCES: &str = "Rust is a systems programming language focused on safety and speed. \
The compiler checks memory safety at compile time. \
Ownership rules let the compiler free memory without a garbage collector. \
Borrowing lets functions use data without taking ownership. \
The borrow checker rejects programs with data races.

Key Features of the language are easy to list. \
1. Zero-cost abstractions keep programs fast. \
2. Pattern matching makes control flow explicit. \
3. Traits describe shared behavior between types. \
4. Cargo builds projects and manages dependencies.

Common Applications include command-line tools and network services. \
Many teams write web servers in Rust. \
Embedded developers use Rust on microcontrollers. \
Game developers use it for engines. \
Browser vendors use it for rendering components.

In conclusion Rust is a strong choice for reliable software. \
The compiler 's strict checks catch many bugs early. \
Developers report high satisfaction with the language. \
The community maintains thorough documentation. \
Learning the language takes time but pays off.
";

/// Three short sentences; every one of them ends up in the summary
pub const THREE_SENTENCES: &str = "Cats sleep most of the day.\nDogs enjoy long walks.\nBirds sing at dawn.\n";

/// File rendering of THREE_SENTENCES: one section, leading blank line
pub const THREE_SENTENCES_EXPECTED: &str = "\nCats sleep most of the day.\nDogs enjoy long walks.\nBirds sing at dawn.\n";

/// Fragments without terminal punctuation, split by the structural hints
pub const UNTERMINATED: &str = "Key Features\n\n1. Fast startup\n2. Small binaries\n\nIn conclusion it is worth a try";
