use crate::ir::{Field, FieldKind};

pub const TEXTAREA_ROWS: u32 = 4;
pub const PASSWORD_MIN_LENGTH: u32 = 8;
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters";

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn form_store(form_name: &str) -> String {
    format!("{form_name}Form")
}

pub fn schema_name(form_name: &str) -> String {
    format!("{form_name}Schema")
}

pub fn render_input(field: &Field, store: &str) -> String {
    let name = &field.name;
    match field.kind {
        FieldKind::Textarea => format!(
            "<Textarea id=\"{name}\" name=\"{name}\" rows={{{TEXTAREA_ROWS}}} {bind} />",
            bind = bind_value(store, name)
        ),
        FieldKind::Files => {
            format!("<Input type=\"file\" multiple id=\"{name}\" name=\"{name}\" />")
        }
        FieldKind::File => format!("<Input type=\"file\" id=\"{name}\" name=\"{name}\" />"),
        _ => format!(
            "<Input type=\"{input_type}\" id=\"{name}\" name=\"{name}\" {bind} />",
            input_type = field.kind.input_type(),
            bind = bind_value(store, name)
        ),
    }
}

fn bind_value(store: &str, name: &str) -> String {
    format!("bind:value={{${store}.{name}}}")
}

pub fn render_field_block(field: &Field, store: &str) -> String {
    let name = &field.name;
    let mut block = String::new();
    block.push_str("\t<div class=\"field\">\n");
    block.push_str(&format!(
        "\t\t<Label for=\"{name}\">{label}</Label>\n",
        label = capitalize(name)
    ));
    block.push_str(&format!("\t\t{}\n", render_input(field, store)));
    block.push_str(&format!(
        "\t\t{{#if $errors.{name}}}<span class=\"error\">{{$errors.{name}}}</span>{{/if}}\n"
    ));
    block.push_str("\t</div>\n");
    block
}

pub fn schema_rule(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Email => "z.string().email()".to_string(),
        FieldKind::Password => {
            format!("z.string().min({PASSWORD_MIN_LENGTH}, '{PASSWORD_MESSAGE}')")
        }
        FieldKind::Number => "z.number()".to_string(),
        FieldKind::File => "z.instanceof(File)".to_string(),
        FieldKind::Files => "z.instanceof(File).array()".to_string(),
        FieldKind::Date => "z.date()".to_string(),
        FieldKind::Text | FieldKind::Textarea | FieldKind::Other(_) => "z.string()".to_string(),
    }
}

pub fn render_schema_entry(field: &Field) -> String {
    format!("\t{}: {},\n", field.name, schema_rule(&field.kind))
}
