//! Extending the combinators with domain builders: a form type that
//! expands into labeled input fields.

use weft_core::html::{body, form, h1, head, input, label, table, td, title, tr};
use weft_core::{attr, each, html_lang, text, Node};

struct Field {
    id: &'static str,
    name: &'static str,
    kind: &'static str,
    heading: &'static str,
}

impl Field {
    fn label(&self) -> Node {
        label(vec![attr::for_(self.id), text(self.heading)])
    }

    fn input(&self) -> Node {
        input(vec![
            attr::id(self.id),
            attr::type_(self.kind),
            attr::name(self.name),
        ])
    }
}

struct LoginForm {
    action: &'static str,
    fields: Vec<Field>,
}

impl LoginForm {
    fn build(self) -> Node {
        form(vec![
            attr::method("POST"),
            attr::action(self.action),
            table(vec![
                each(self.fields, |f| {
                    tr(vec![td(vec![f.label()]), td(vec![f.input()])])
                }),
                tr(vec![td(vec![
                    attr::colspan(2),
                    input(vec![attr::type_("submit"), attr::value("Login")]),
                ])]),
            ]),
        ])
    }
}

fn main() {
    let page = html_lang(
        "en",
        vec![
            head(vec![title("Example: Extensions")]),
            body(vec![
                h1(vec![text("Example: Extensions")]),
                LoginForm {
                    action: "/",
                    fields: vec![
                        Field {
                            id: "user",
                            name: "username",
                            kind: "text",
                            heading: "Username",
                        },
                        Field {
                            id: "pass",
                            name: "password",
                            kind: "password",
                            heading: "Password",
                        },
                    ],
                }
                .build(),
            ]),
        ],
    );

    println!(
        "{}",
        String::from_utf8_lossy(&page.render_to_vec())
    );
}
