mod completer;
mod highlighter;
mod prompt;
mod view;

use reedline::{
    ColumnarMenu, DefaultHinter, Emacs, FileBackedHistory, History, KeyCode, KeyModifiers,
    MenuBuilder, Reedline, ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use schemascope_core::dispatch::DIRECTIVES;
use schemascope_core::{SchemaIndex, dispatch};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, error, info};

use self::completer::{Candidate, SchemaCompleter};
use self::highlighter::SchemaHighlighter;
use self::prompt::SchemaPrompt;
pub use self::view::Painter;

// Shell configuration constants
const SHELL_HISTORY_SIZE: usize = 500;

const HELP: &str = ".help";
const EXIT: &str = ".exit";
const QUIT: &str = ".quit";
const SHELL_COMMANDS: [&str; 3] = [HELP, EXIT, QUIT];

const HELP_TEXT: &str = "\
<name>         fields of a type, or the signature of a query or mutation
.types         list all types
.queries       list all queries
.mutations     list all mutations
.help          show this help
.exit, .quit   leave the shell (Ctrl-D and Ctrl-C also work)";

/// One unit of input from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// End of input or interrupt
    Exit,
}

/// Source of user input for a [`Session`].
pub trait LineReader {
    fn next_line(&mut self) -> io::Result<Input>;
}

/// Where command history is kept.
#[derive(Debug, Clone)]
pub enum HistoryMode {
    File(PathBuf),
    Memory,
}

impl HistoryMode {
    /// `~/.schemascope/shell/history`, or in-memory when there is no home.
    pub fn default_file() -> Self {
        match dirs::home_dir() {
            Some(home) => {
                HistoryMode::File(home.join(".schemascope").join("shell").join("history"))
            }
            None => HistoryMode::Memory,
        }
    }
}

pub struct ShellOptions {
    pub schema: PathBuf,
    pub painter: Painter,
    pub history: HistoryMode,
}

/// Line reader backed by a reedline editor with schema-aware completion.
pub struct ReedlineReader {
    editor: Reedline,
    prompt: SchemaPrompt,
}

impl ReedlineReader {
    pub fn new(
        index: &SchemaIndex,
        prompt: SchemaPrompt,
        history: &HistoryMode,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let candidates = completion_candidates(index);

        let completer = Box::new(SchemaCompleter::new(candidates));
        let completion_menu = Box::new(ColumnarMenu::default().with_name("completion_menu"));

        let mut keybindings = default_emacs_keybindings();
        keybindings.add_binding(
            KeyModifiers::NONE,
            KeyCode::Tab,
            ReedlineEvent::UntilFound(vec![
                ReedlineEvent::Menu("completion_menu".to_string()),
                ReedlineEvent::MenuNext,
            ]),
        );

        let highlighter = Box::new(SchemaHighlighter::new(
            index.all_identifiers().into_iter().filter(|id| !id.starts_with('.')),
            DIRECTIVES
                .iter()
                .chain(SHELL_COMMANDS.iter())
                .map(|d| d.to_string()),
        ));

        let editor = Reedline::create()
            .with_history(open_history(history)?)
            .with_completer(completer)
            .with_highlighter(highlighter)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_hinter(Box::new(
                DefaultHinter::default().with_style(
                    nu_ansi_term::Style::new()
                        .italic()
                        .fg(nu_ansi_term::Color::LightGray),
                ),
            ))
            .with_edit_mode(Box::new(Emacs::new(keybindings)));

        Ok(Self { editor, prompt })
    }
}

impl LineReader for ReedlineReader {
    fn next_line(&mut self) -> io::Result<Input> {
        loop {
            match self.editor.read_line(&self.prompt)? {
                Signal::Success(buffer) => return Ok(Input::Line(buffer)),
                Signal::CtrlD | Signal::CtrlC => return Ok(Input::Exit),
                #[allow(unreachable_patterns)]
                other => debug!("Ignoring editor signal: {:?}", other),
            }
        }
    }
}

fn open_history(mode: &HistoryMode) -> Result<Box<dyn History>, Box<dyn std::error::Error>> {
    if let HistoryMode::File(path) = mode {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(SHELL_HISTORY_SIZE, path.clone()) {
            Ok(history) => return Ok(Box::new(history)),
            Err(e) => error!("Cannot open history file {}: {}", path.display(), e),
        }
    }
    Ok(Box::new(FileBackedHistory::new(SHELL_HISTORY_SIZE)?))
}

/// Every identifier with the category it dispatches to, plus shell commands.
fn completion_candidates(index: &SchemaIndex) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = index
        .all_identifiers()
        .into_iter()
        .filter_map(|value| {
            index.category_of(&value).map(|category| Candidate {
                description: category.to_string(),
                value,
            })
        })
        .collect();
    candidates.extend(SHELL_COMMANDS.iter().map(|cmd| Candidate {
        value: cmd.to_string(),
        description: "command".to_string(),
    }));
    candidates
}

/// The interactive explorer: one schema index, one input source.
pub struct Session<R> {
    index: SchemaIndex,
    reader: R,
    painter: Painter,
}

impl<R: LineReader> Session<R> {
    pub fn new(index: SchemaIndex, reader: R, painter: Painter) -> Self {
        Self {
            index,
            reader,
            painter,
        }
    }

    /// Reads, dispatches and prints until the reader signals exit or the
    /// user asks to leave. I/O failures end the session with an error.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        info!("Session started.");
        loop {
            let buffer = match self.reader.next_line()? {
                Input::Line(buffer) => buffer,
                Input::Exit => break,
            };

            let trimmed = buffer.trim();
            match trimmed {
                "" => continue,
                EXIT | QUIT => break,
                HELP => writeln!(out, "{}", HELP_TEXT)?,
                _ => {
                    for line in dispatch(trimmed, &self.index).render() {
                        writeln!(out, "{}", self.painter.paint(&line))?;
                    }
                }
            }
            out.flush()?;
        }
        writeln!(out, "Bye!")?;
        out.flush()?;
        info!("Session ended.");
        Ok(())
    }
}

pub fn run(options: ShellOptions) -> Result<(), Box<dyn std::error::Error>> {
    let index = SchemaIndex::load(&options.schema).inspect_err(|e| {
        error!("Failed to load schema {}: {}", options.schema.display(), e);
    })?;

    println!(
        "Schema: {} (types: {}, queries: {}, mutations: {})",
        options.schema.display(),
        index.type_names().len(),
        index.query_names().len(),
        index.mutation_names().len()
    );
    println!("Type '.help' for commands.");

    let label = options
        .schema
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| options.schema.display().to_string());
    let prompt = SchemaPrompt::new(label, options.painter.is_styled());
    let reader = ReedlineReader::new(&index, prompt, &options.history)?;

    let mut session = Session::new(index, reader, options.painter);
    session.run(&mut io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    struct ScriptedReader {
        inputs: VecDeque<Input>,
    }

    impl ScriptedReader {
        fn new(lines: &[&str]) -> Self {
            Self {
                inputs: lines.iter().map(|l| Input::Line(l.to_string())).collect(),
            }
        }
    }

    impl LineReader for ScriptedReader {
        fn next_line(&mut self) -> io::Result<Input> {
            Ok(self.inputs.pop_front().unwrap_or(Input::Exit))
        }
    }

    struct FailingReader;

    impl LineReader for FailingReader {
        fn next_line(&mut self) -> io::Result<Input> {
            Err(io::Error::other("terminal gone"))
        }
    }

    fn index() -> SchemaIndex {
        let sdl = r#"
            type User { name: String id: ID }
            type Query { user(id: ID): User }
            type Mutation { deleteUser(id: ID): Boolean }
        "#;
        SchemaIndex::from_sdl(sdl, "session.graphql").unwrap()
    }

    fn run_script(lines: &[&str]) -> String {
        let mut session = Session::new(index(), ScriptedReader::new(lines), Painter::plain());
        let mut out = Vec::new();
        session.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_type_then_query() {
        let output = run_script(&["User", "  user  "]);
        assert_eq!(
            output,
            "id: ID\nname: String\nuser (\n  id: ID\n) -> User\nBye!\n"
        );
    }

    #[test]
    fn unknown_and_blank_input_print_nothing() {
        let output = run_script(&["doesNotExist", "", "   ", ".mutations"]);
        assert_eq!(output, "deleteUser\nBye!\n");
    }

    #[test]
    fn exit_command_stops_before_remaining_input() {
        let output = run_script(&[".queries", ".exit", "User"]);
        assert_eq!(output, "user\nBye!\n");
    }

    #[test]
    fn quit_and_end_of_input_say_goodbye_alike() {
        assert_eq!(run_script(&[".quit"]), run_script(&[]));
        assert_eq!(run_script(&[]), "Bye!\n");
    }

    #[test]
    fn help_lists_directives() {
        let output = run_script(&[".help"]);
        for directive in DIRECTIVES {
            assert!(output.contains(directive));
        }
    }

    #[test]
    fn reader_errors_propagate() {
        let mut session = Session::new(index(), FailingReader, Painter::plain());
        let err = session.run(&mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }

    #[test]
    fn candidates_describe_categories() {
        let candidates = completion_candidates(&index());
        let describe = |value: &str| {
            candidates
                .iter()
                .find(|c| c.value == value)
                .map(|c| c.description.clone())
        };
        assert_eq!(describe("User").as_deref(), Some("type"));
        assert_eq!(describe("user").as_deref(), Some("query"));
        assert_eq!(describe("deleteUser").as_deref(), Some("mutation"));
        assert_eq!(describe(".types").as_deref(), Some("directive"));
        assert_eq!(describe(".exit").as_deref(), Some("command"));
    }
}
