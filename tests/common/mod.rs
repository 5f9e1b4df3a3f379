//! Shared fake host for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use sketch_plugin_log::{HostContext, HostObject, ReflectionCategory, SystemLog};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// System log that records every entry.
#[derive(Clone, Default)]
pub struct RecordingLog {
    entries: Rc<RefCell<Vec<String>>>,
}

impl RecordingLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl SystemLog for RecordingLog {
    fn write(&self, message: &str) {
        self.entries.borrow_mut().push(message.to_string());
    }
}

/// Plugin context pointing at a script path.
pub struct FakeContext {
    script_path: PathBuf,
    log: RecordingLog,
}

impl HostContext for FakeContext {
    fn script_path(&self) -> PathBuf {
        self.script_path.clone()
    }

    fn system_log(&self) -> &dyn SystemLog {
        &self.log
    }
}

/// Create a context and a handle on its recorded system log.
pub fn fake_context(script_path: impl Into<PathBuf>) -> (FakeContext, RecordingLog) {
    let log = RecordingLog::default();
    let context = FakeContext {
        script_path: script_path.into(),
        log: log.clone(),
    };
    (context, log)
}

/// A layer that reports every category.
pub struct FakeLayer;

impl HostObject for FakeLayer {
    fn description(&self) -> String {
        "<MSShapeGroup: 0x600000c2a1c0> Rectangle".to_string()
    }

    fn class_name(&self) -> String {
        "MSShapeGroup".to_string()
    }

    fn names(&self, category: ReflectionCategory) -> Option<Vec<String>> {
        let names = match category {
            ReflectionCategory::Properties => vec!["style", "frame"],
            ReflectionCategory::PropertiesWithAncestors => vec!["style", "frame", "name"],
            ReflectionCategory::ClassMethods => vec!["shapeWithPath:"],
            ReflectionCategory::ClassMethodsWithAncestors => vec!["shapeWithPath:", "new"],
            ReflectionCategory::InstanceMethods => vec!["resize"],
            ReflectionCategory::InstanceMethodsWithAncestors => vec!["resize", "select:"],
            ReflectionCategory::Protocols => vec!["MSLayerContainment"],
            ReflectionCategory::ProtocolsWithAncestors => vec!["MSLayerContainment", "NSCopying"],
        };
        Some(names.into_iter().map(String::from).collect())
    }

    fn tree_as_dictionary(&self) -> Option<Value> {
        Some(json!({ "<class>": "MSShapeGroup", "name": "Rectangle", "layers": [] }))
    }
}

/// An object whose reflection data is unavailable.
pub struct OpaqueObject;

impl HostObject for OpaqueObject {
    fn description(&self) -> String {
        "<opaque>".to_string()
    }

    fn class_name(&self) -> String {
        String::new()
    }

    fn names(&self, _category: ReflectionCategory) -> Option<Vec<String>> {
        None
    }

    fn tree_as_dictionary(&self) -> Option<Value> {
        None
    }
}

/// A tracing event reduced to its level and rendered fields.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub level: Level,
    pub fields: BTreeMap<String, String>,
}

#[derive(Default)]
struct FieldRecorder(BTreeMap<String, String>);

impl Visit for FieldRecorder {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }
}

/// Layer that keeps every event it sees.
#[derive(Clone, Default)]
pub struct CapturedEvents {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CapturedEvents {
    pub fn at_level(&self, level: Level) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldRecorder::default();
        event.record(&mut fields);
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}
