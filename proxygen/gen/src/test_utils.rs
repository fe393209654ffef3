//! Shared test utilities for proxygen-gen tests.
//!
//! Fixture builders for schema documents so unit tests can describe small
//! schemas inline without spelling out every struct field.

use indexmap::IndexMap;
use proxygen_define::{
    ActionDescription, BindingKind, ControllerDescription, EnumMember, EnumValue,
    FieldDescription, HttpMethod, ModuleDescription, ParameterDescription, PrimitiveKind,
    SchemaModel, TypeDescription,
};

use crate::progress::{ProgressEvent, ProgressSink};

/// Creates a schema from module and type entries, keeping their order.
pub fn make_schema(
    modules: Vec<(&str, ModuleDescription)>,
    types: Vec<(&str, TypeDescription)>,
) -> SchemaModel {
    SchemaModel {
        modules: modules
            .into_iter()
            .map(|(key, module)| (key.to_string(), module))
            .collect(),
        types: types
            .into_iter()
            .map(|(id, ty)| (id.to_string(), ty))
            .collect(),
    }
}

/// Creates a module from keyed controllers.
pub fn make_module(
    remote_service_name: &str,
    controllers: Vec<(&str, ControllerDescription)>,
) -> ModuleDescription {
    ModuleDescription {
        remote_service_name: remote_service_name.to_string(),
        controllers: controllers
            .into_iter()
            .map(|(key, controller)| (key.to_string(), controller))
            .collect::<IndexMap<_, _>>(),
    }
}

/// Creates a controller.
pub fn make_controller(
    name: &str,
    group: &str,
    actions: Vec<ActionDescription>,
) -> ControllerDescription {
    ControllerDescription {
        controller_name: name.to_string(),
        controller_group_name: group.to_string(),
        actions,
    }
}

/// Creates an action.
///
/// ## Arguments
///
/// * `name` - Action name (becomes the emitted function name)
/// * `method` - HTTP method
/// * `url` - URL template (may contain `{param}` placeholders)
/// * `parameters` - Parameters in declaration order
/// * `returns` - Optional return type identifier
pub fn make_action(
    name: &str,
    method: HttpMethod,
    url: &str,
    parameters: Vec<ParameterDescription>,
    returns: Option<&str>,
) -> ActionDescription {
    ActionDescription {
        name: name.to_string(),
        http_method: method,
        url_template: url.to_string(),
        parameters,
        return_type_ref: returns.map(str::to_string),
    }
}

/// Creates a required parameter.
pub fn make_param(name: &str, binding_kind: BindingKind, type_ref: &str) -> ParameterDescription {
    ParameterDescription {
        name: name.to_string(),
        binding_kind,
        type_ref: type_ref.to_string(),
        optional: false,
    }
}

/// Creates an optional parameter.
pub fn make_optional_param(
    name: &str,
    binding_kind: BindingKind,
    type_ref: &str,
) -> ParameterDescription {
    ParameterDescription {
        optional: true,
        ..make_param(name, binding_kind, type_ref)
    }
}

pub fn make_primitive(kind: PrimitiveKind) -> TypeDescription {
    TypeDescription::Primitive { primitive: kind }
}

pub fn make_array(element: &str) -> TypeDescription {
    TypeDescription::Array {
        element: element.to_string(),
    }
}

pub fn make_dictionary(value: &str) -> TypeDescription {
    TypeDescription::Dictionary {
        value: value.to_string(),
    }
}

pub fn make_reference(target: &str) -> TypeDescription {
    TypeDescription::Reference {
        target: target.to_string(),
    }
}

/// Creates a structured type from `(name, type_ref, nullable)` triples.
pub fn make_structured(name: &str, fields: Vec<(&str, &str, bool)>) -> TypeDescription {
    TypeDescription::Structured {
        name: name.to_string(),
        fields: fields
            .into_iter()
            .map(|(field, type_ref, nullable)| FieldDescription {
                name: field.to_string(),
                type_ref: type_ref.to_string(),
                nullable,
            })
            .collect(),
    }
}

/// Creates an enum type with integer member values.
pub fn make_enum(name: &str, members: Vec<(&str, i64)>) -> TypeDescription {
    TypeDescription::Enum {
        name: name.to_string(),
        members: members
            .into_iter()
            .map(|(member, value)| EnumMember {
                name: member.to_string(),
                value: EnumValue::Integer(value),
            })
            .collect(),
    }
}

/// The common primitive types most fixtures reference.
pub fn system_types() -> Vec<(&'static str, TypeDescription)> {
    vec![
        ("System.String", make_primitive(PrimitiveKind::Text)),
        ("System.Int32", make_primitive(PrimitiveKind::Integer)),
        ("System.Boolean", make_primitive(PrimitiveKind::Boolean)),
    ]
}

/// The single-module `App` schema with one `user` controller exposing
/// `getById(id) -> UserDto`.
pub fn make_user_schema() -> SchemaModel {
    let get_by_id = make_action(
        "getById",
        HttpMethod::Get,
        "/api/app/user/{id}",
        vec![make_param("id", BindingKind::Path, "System.Int32")],
        Some("UserDto"),
    );

    let mut types = system_types();
    types.push((
        "UserDto",
        make_structured(
            "UserDto",
            vec![("id", "System.Int32", false), ("name", "System.String", true)],
        ),
    ));

    make_schema(
        vec![(
            "App",
            make_module(
                "app",
                vec![("UserController", make_controller("User", "user", vec![get_by_id]))],
            ),
        )],
        types,
    )
}

/// Progress sink that records every event for later assertions.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: std::sync::Mutex<Vec<ProgressEvent>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, event: ProgressEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
