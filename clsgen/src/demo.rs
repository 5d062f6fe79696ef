//! Built-in demonstration classes.

use clsgen_cls::{Class, Component, Method, MethodArgument, Parameter, Property, XData};
use clsgen_interop::{
    BusinessOperation, HttpMethod, Location, MessageMap, RequestClass, ResponseClass, Route,
};

/// Class written by `clsgen demo` when no `--class` is given.
pub const SAMPLE: &str = "Test.Test";

/// Every demonstration class, in listing order.
pub fn all() -> Vec<Class> {
    vec![
        sample(),
        operation(),
        add_pet_request(),
        pet_response(),
    ]
}

/// Look up a demonstration class by its qualified name.
pub fn find(name: &str) -> Option<Class> {
    all().into_iter().find(|class| class.name == name)
}

fn sample() -> Class {
    let message_map: MessageMap = [
        ("Test.Messages.AddPetRequest", "AddPet"),
        ("Test.Messages.TestRequest", "Test"),
    ]
    .into_iter()
    .collect();

    Class::new(SAMPLE)
        .extends_all(["%Persistent", "Ens.Request"])
        .keyword("Abstract")
        .doc("Sample class generated by clsgen")
        .component(
            Parameter::new("RESPONSECLASSNAME")
                .ty("STRING")
                .value("Ens.Response"),
        )
        .component(Parameter::new("%JSONENABLED").value(1).keyword("Deprecated"))
        .component(
            Property::new("Id", "%Integer")
                .doc("Required property")
                .keyword("Required")
                .keyword_value("InitialExpression", 0),
        )
        .component(
            Property::new("TestAbc123", "%String")
                .param("XMLNAME", "test_abc 123")
                .param("MAXLEN", 50)
                .keyword("Deprecated"),
        )
        .component(Property::new("Body", "Test.Object").list().doc("List example"))
        .component(Component::class_method(
            Method::new("Test")
                .argument(MethodArgument::new("pInput"))
                .argument(MethodArgument::typed("pOutput", "Ens.Response").output())
                .argument(MethodArgument::typed("test", "%Boolean").default_value(0))
                .returns("%Status")
                .body([
                    "set pOutput = ##class(Ens.Response).%New()",
                    "return $$$OK",
                ])
                .doc(["Test method", "Multiline example"]),
        ))
        .component(
            Route::new("AddPet", "Ens.Request", "Ens.Response", HttpMethod::Post, "/pet")
                .to_method(),
        )
        .component(XData::new("MessageMap", message_map.render()).mime_type("application/xml"))
}

fn operation() -> Class {
    BusinessOperation::new(
        "Test.BO",
        [
            Route::new(
                "AddPet",
                "Test.AddPetRequest",
                "Test.PetResponse",
                HttpMethod::Post,
                "/pet",
            )
            .doc("Add a new pet to the store"),
            Route::new(
                "DeletePet",
                "Test.DeletePetRequest",
                "Ens.Response",
                HttpMethod::Delete,
                "/pet",
            ),
        ],
    )
    .component(Parameter::new("INVOCATION").value("Queue"))
    .into()
}

fn add_pet_request() -> Class {
    RequestClass::new("Test.AddPetRequest")
        .extends("%JSON.Adaptor")
        .property(Property::new("name", "%String").param("MAXLEN", 100), Location::Body)
        .property(Property::new("id", "%Integer"), Location::Path)
        .property(Property::new("ApiKey", "%String"), Location::Header)
        .content_type("application/json")
        .component(Parameter::new("RESPONSECLASSNAME").value("Test.PetResponse"))
        .doc("Request body for adding a pet")
        .into()
}

fn pet_response() -> Class {
    ResponseClass::new("Test.PetResponse")
        .extends("%JSON.Adaptor")
        .component(Property::new("id", "%Integer"))
        .component(Property::new("status", "%String"))
        .into()
}
