use crate::drop_out_stack::{Drain, DropOutStack};
use std::path::Path;
use std::{error, fmt};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Event {
    pub id: u64,
    pub action: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.action)
    }
}

pub fn load_events<P>(path: P) -> Result<Vec<Event>, Box<dyn error::Error>>
where
    P: AsRef<Path>,
{
    let mut events = vec![];
    let mut reader = csv::Reader::from_path(path)?;
    for result in reader.deserialize() {
        let record: Event = result?;
        events.push(record);
    }

    debug!(count = events.len(), "loaded event log");
    Ok(events)
}

/// Undo history that keeps only the most recent events.
pub struct History {
    events: DropOutStack<Event>,
}

impl History {
    pub fn new(depth: usize) -> Result<Self, Box<dyn error::Error>> {
        Ok(Self {
            events: DropOutStack::new(depth)?,
        })
    }

    pub fn record(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn record_if_room(&mut self, event: Event) -> bool {
        self.events.push_if_not_full(event)
    }

    pub fn undo(&mut self) -> Option<Event> {
        self.events.try_pop()
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.try_peek()
    }

    pub fn len(&self) -> usize {
        self.events.count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.events.capacity()
    }

    // empties the history, newest first
    pub fn unwind(&mut self) -> Drain<'_, Event> {
        self.events.drain()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub recorded: usize,
    pub retained: usize,
    pub rejected: usize,
}

/// Feeds `events` into a fresh history of the given depth. In strict mode
/// events that arrive once the history is full are rejected instead of
/// pushing out the oldest entry.
pub fn replay<I>(
    events: I,
    depth: usize,
    strict: bool,
) -> Result<(History, ReplaySummary), Box<dyn error::Error>>
where
    I: IntoIterator<Item = Event>,
{
    let mut history = History::new(depth)?;
    let mut recorded = 0;
    let mut rejected = 0;

    for event in events {
        recorded += 1;
        if strict {
            if !history.record_if_room(event) {
                rejected += 1;
            }
        } else {
            history.record(event);
        }
    }

    let summary = ReplaySummary {
        recorded,
        retained: history.len(),
        rejected,
    };
    info!(
        recorded = summary.recorded,
        retained = summary.retained,
        rejected = summary.rejected,
        "replayed event log"
    );

    Ok((history, summary))
}
