//! Replay a scripted interaction session against an autocomplete widget
//!
//! The script is a JSON array of steps. Each step is either a widget event
//! (`{"event": "query_changed", "value": "fr"}`) or a host action
//! (`{"host": "resolve_next"}`) standing in for what a browser would do
//! between events: answering deferred lookups, writing into the input
//! without a change notification, mounting and unmounting.
//!
//! ```text
//! autocomplete-replay --defer --list demos/countries.txt demos/session.json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use autocomplete_engine::{DeferredHandle, DeferredSource, ListSource, MatchMode};
use autocomplete_widget::{
    Autocomplete, KeyCode, KeyEvent, PlatformTraits, Settings, SharedInput, WidgetEvent,
    WidgetResult, WidgetState,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Replay widget events from a script and print the resulting states
#[derive(Parser, Debug)]
#[command(name = "autocomplete-replay")]
#[command(about = "Drive an autocomplete widget from a JSON event script", long_about = None)]
struct Args {
    /// Option list (.json array of strings, or one entry per line)
    #[arg(short, long)]
    list: PathBuf,

    /// Event script (JSON array of steps)
    script: PathBuf,

    /// Settings file (defaults to the user config file, if any)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Behave like a touch-primary device
    #[arg(long)]
    touch: bool,

    /// Hold lookups until a `resolve_*` host step answers them
    #[arg(long)]
    defer: bool,

    /// Match entries by prefix instead of substring
    #[arg(long)]
    prefix: bool,

    /// Print one JSON object per step instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

/// One line of a script
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Step {
    Host(HostStep),
    Event(WidgetEvent),
}

/// Things the host does between widget events
#[derive(Debug, Deserialize)]
#[serde(tag = "host", rename_all = "snake_case")]
enum HostStep {
    /// Type `text` one character at a time: a keydown on the input, then
    /// the change notification with the character appended
    Type { text: String },
    /// Assistive software writes into the input without a change event
    DirectWrite { value: String },
    ResolveNext,
    ResolveLatest,
    /// Drop every outstanding lookup unanswered
    AbandonAll,
    Flush,
    Mount,
    Unmount,
}

#[derive(Debug, Serialize)]
struct StepReport<'a> {
    step: usize,
    #[serde(flatten)]
    result: &'a WidgetResult<String>,
    state: &'a WidgetState<String>,
    hint: Option<String>,
    pending: usize,
}

fn parse_script(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("script must be a JSON array of steps")
}

struct Session {
    widget: Autocomplete<String>,
    input: SharedInput,
    list: ListSource,
    deferred: Option<DeferredHandle<String>>,
}

impl Session {
    fn new(args: &Args, settings: &Settings) -> Result<Self> {
        let mode = if args.prefix {
            MatchMode::Prefix
        } else {
            MatchMode::Substring
        };
        let list = ListSource::load(&args.list)?.with_mode(mode);
        info!("loaded {} options from {}", list.len(), args.list.display());

        let platform = if args.touch {
            PlatformTraits::touch()
        } else {
            PlatformTraits::desktop()
        };
        let config = settings.widget_config(platform);

        let (widget, deferred) = if args.defer {
            let (source, handle) = DeferredSource::new();
            (Autocomplete::text(config, source), Some(handle))
        } else {
            (Autocomplete::text(config, list.clone()), None)
        };

        let input = SharedInput::new(widget.state().query());
        let widget = widget.with_input_probe(input.clone());
        Ok(Self {
            widget,
            input,
            list,
            deferred,
        })
    }

    fn deferred(&self) -> Result<&DeferredHandle<String>> {
        match &self.deferred {
            Some(handle) => Ok(handle),
            None => bail!("resolve steps need --defer"),
        }
    }

    fn run(&mut self, step: &Step) -> Result<WidgetResult<String>> {
        let result = match step {
            Step::Event(event) => self.widget.handle_event(event),
            Step::Host(HostStep::Type { text }) => self.type_text(text),
            Step::Host(HostStep::DirectWrite { value }) => {
                self.input.set(value.as_str());
                // the written text is only seen by the next poll
                return Ok(WidgetResult::not_consumed());
            }
            Step::Host(HostStep::ResolveNext) => {
                let handle = self.deferred()?;
                if handle.resolve_next_with(|query| self.list.filter(query)).is_none() {
                    debug!("resolve_next: nothing pending");
                }
                self.widget.flush_results()
            }
            Step::Host(HostStep::ResolveLatest) => {
                let handle = self.deferred()?;
                if let Some(query) = handle.pending_queries().pop() {
                    handle.resolve_latest(self.list.filter(&query));
                }
                self.widget.flush_results()
            }
            Step::Host(HostStep::AbandonAll) => {
                let dropped = self.deferred()?.abandon_all();
                debug!("abandoned {} lookups", dropped);
                WidgetResult::not_consumed()
            }
            Step::Host(HostStep::Flush) => self.widget.flush_results(),
            Step::Host(HostStep::Mount) => self.widget.mount(),
            Step::Host(HostStep::Unmount) => {
                self.widget.unmount();
                WidgetResult::not_consumed()
            }
        };
        // the rendered input always shows the query
        self.input.set(self.widget.state().query());
        Ok(result)
    }
}

impl Session {
    fn type_text(&mut self, text: &str) -> WidgetResult<String> {
        let mut combined = WidgetResult::not_consumed();
        for ch in text.chars() {
            let mut results = Vec::with_capacity(2);
            if let Some(code) = KeyCode::from_char(ch) {
                results.push(self.widget.key_down(&KeyEvent::on_input(code)));
            }
            let value = format!("{}{}", self.widget.state().query(), ch);
            results.push(self.widget.query_changed(&value));
            for result in results {
                combined.consumed |= result.consumed;
                combined.actions.extend(result.actions);
            }
        }
        combined
    }
}

fn print_text(step: usize, result: &WidgetResult<String>, session: &Session) {
    let state = session.widget.state();
    println!(
        "[{}] query={:?} menu={} focused={:?} selected={:?} options={:?}{}",
        step,
        state.query(),
        state.menu_open(),
        state.focused(),
        state.selected(),
        state.options(),
        if state.show_no_results() {
            " (no results)"
        } else {
            ""
        }
    );
    if result.consumed {
        println!("    consumed");
    }
    for action in &result.actions {
        println!("    {:?}", action);
    }
    if let Some(hint) = session.widget.hint() {
        println!("    hint {:?}", hint);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "autocomplete_replay=debug,autocomplete_widget=debug,autocomplete_engine=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    let script = fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script {}", args.script.display()))?;
    let steps = parse_script(&script)?;
    info!("replaying {} steps", steps.len());

    let mut session = Session::new(&args, &settings)?;
    for (i, step) in steps.iter().enumerate() {
        debug!("step {}: {:?}", i, step);
        let result = session
            .run(step)
            .with_context(|| format!("step {} failed", i))?;
        if args.json {
            let report = StepReport {
                step: i,
                result: &result,
                state: session.widget.state(),
                hint: session.widget.hint(),
                pending: session.widget.pending_requests(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_text(i, &result, &session);
        }
    }

    Ok(())
}
