//! Reflection capability of host objects.

/// A category of names the host runtime can enumerate for an object's class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectionCategory {
    /// Properties declared on the class itself.
    Properties,
    /// Properties including those of every superclass.
    PropertiesWithAncestors,
    /// Class-level methods.
    ClassMethods,
    /// Class-level methods including inherited ones.
    ClassMethodsWithAncestors,
    /// Instance methods.
    InstanceMethods,
    /// Instance methods including inherited ones.
    InstanceMethodsWithAncestors,
    /// Adopted protocols.
    Protocols,
    /// Adopted protocols including those of every superclass.
    ProtocolsWithAncestors,
}

impl ReflectionCategory {
    /// Every category, in dump order.
    pub const ALL: [ReflectionCategory; 8] = [
        ReflectionCategory::Properties,
        ReflectionCategory::PropertiesWithAncestors,
        ReflectionCategory::ClassMethods,
        ReflectionCategory::ClassMethodsWithAncestors,
        ReflectionCategory::InstanceMethods,
        ReflectionCategory::InstanceMethodsWithAncestors,
        ReflectionCategory::Protocols,
        ReflectionCategory::ProtocolsWithAncestors,
    ];

    /// Section header label.
    pub fn label(self) -> &'static str {
        match self {
            ReflectionCategory::Properties => "Properties",
            ReflectionCategory::PropertiesWithAncestors => "Properties With Ancestors",
            ReflectionCategory::ClassMethods => "Methods",
            ReflectionCategory::ClassMethodsWithAncestors => "Methods With Ancestors",
            ReflectionCategory::InstanceMethods => "Instance Methods",
            ReflectionCategory::InstanceMethodsWithAncestors => {
                "Instance Methods With Ancestors"
            }
            ReflectionCategory::Protocols => "Protocols",
            ReflectionCategory::ProtocolsWithAncestors => "Protocols With Ancestors",
        }
    }
}

/// An object the host runtime can introspect.
///
/// Every query is optional: an object that cannot report a category returns
/// `None` and the dump renders that section empty.
pub trait HostObject {
    /// Human-readable description of the object itself.
    fn description(&self) -> String;

    /// Name of the object's class.
    fn class_name(&self) -> String;

    /// Names in the given reflection category.
    fn names(&self, category: ReflectionCategory) -> Option<Vec<String>>;

    /// Recursive structured representation of the object.
    fn tree_as_dictionary(&self) -> Option<serde_json::Value>;
}
