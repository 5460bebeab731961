use crate::fields::{
    capitalize, form_store, render_field_block, render_schema_entry, schema_name,
};
use crate::ir::Form;

/// Rendered text that only a multi-file widget produces. Multipart encoding
/// is keyed on this exact text rather than on field kinds.
pub const MULTI_FILE_MARKER: &str = "type=\"file\" multiple";
pub const MULTIPART_ATTR: &str = " enctype=\"multipart/form-data\"";
pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Submitting...";

const INPUT_IMPORT: &str = "\timport { Input } from '$lib/components/ui/input';\n";
const TEXTAREA_IMPORT: &str = "\timport { Textarea } from '$lib/components/ui/textarea';\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub view: String,
    pub server: String,
}

pub fn render_form(form: &Form, project_name: Option<&str>) -> RenderedForm {
    RenderedForm {
        view: render_view(form, project_name),
        server: render_server(form),
    }
}

pub fn page_title(form_name: &str, project_name: Option<&str>) -> String {
    match project_name {
        Some(project) => format!("{} | {project}", capitalize(form_name)),
        None => capitalize(form_name),
    }
}

pub fn render_view(form: &Form, project_name: Option<&str>) -> String {
    let store = form_store(&form.name);
    let blocks: String = form
        .fields
        .iter()
        .map(|field| render_field_block(field, &store))
        .collect();

    let mut imports = String::new();
    imports.push_str("\timport { superForm } from 'sveltekit-superforms';\n");
    imports.push_str("\timport { Button } from '$lib/components/ui/button';\n");
    if blocks.contains("<Input") {
        imports.push_str(INPUT_IMPORT);
    }
    imports.push_str("\timport { Label } from '$lib/components/ui/label';\n");
    if blocks.contains("<Textarea") {
        imports.push_str(TEXTAREA_IMPORT);
    }

    let enctype = if blocks.contains(MULTI_FILE_MARKER) {
        MULTIPART_ATTR
    } else {
        ""
    };

    format!(
        "<script lang=\"ts\">\n\
{imports}\n\
\tlet {{ data }} = $props();\n\
\n\
\tconst {{ form: {store}, errors, enhance, submitting }} = superForm(data.form);\n\
</script>\n\
\n\
<svelte:head>\n\
\t<title>{title}</title>\n\
</svelte:head>\n\
\n\
<h1>{heading}</h1>\n\
\n\
<form method=\"POST\" use:enhance{enctype}>\n\
{blocks}\
\t<Button type=\"submit\" disabled={{$submitting}}>\n\
\t\t{{#if $submitting}}{SUBMITTING_LABEL}{{:else}}{SUBMIT_LABEL}{{/if}}\n\
\t</Button>\n\
</form>\n",
        title = page_title(&form.name, project_name),
        heading = capitalize(&form.name),
    )
}

pub fn render_server(form: &Form) -> String {
    let schema = schema_name(&form.name);
    let entries: String = form.fields.iter().map(render_schema_entry).collect();
    let names: Vec<&str> = form.fields.iter().map(|field| field.name.as_str()).collect();

    let superforms_import = if form.has_file_fields() {
        "import { superValidate, withFiles } from 'sveltekit-superforms';\n"
    } else {
        "import { superValidate } from 'sveltekit-superforms';\n"
    };
    let (failure, success) = if form.has_file_fields() {
        ("fail(400, withFiles({ form }))", "withFiles({ form })")
    } else {
        ("fail(400, { form })", "{ form }")
    };

    format!(
        "import {{ fail }} from '@sveltejs/kit';\n\
{superforms_import}\
import {{ zod }} from 'sveltekit-superforms/adapters';\n\
import {{ z }} from 'zod';\n\
import type {{ Actions, PageServerLoad }} from './$types';\n\
\n\
const {schema} = z.object({{\n\
{entries}\
}});\n\
\n\
export const load: PageServerLoad = async () => {{\n\
\tconst form = await superValidate(zod({schema}));\n\
\treturn {{ form }};\n\
}};\n\
\n\
export const actions: Actions = {{\n\
\tdefault: async ({{ request }}) => {{\n\
\t\tconst form = await superValidate(request, zod({schema}));\n\
\t\tif (!form.valid) {{\n\
\t\t\treturn {failure};\n\
\t\t}}\n\
\n\
\t\tconst {{ {fields} }} = form.data;\n\
\n\
\t\t// TODO: handle the submitted {name} form\n\
\n\
\t\treturn {success};\n\
\t}}\n\
}};\n",
        fields = names.join(", "),
        name = form.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup() -> Form {
        Form::parse("signup", &["email:email", "password:password"])
    }

    #[test]
    fn signup_view_has_two_ordered_blocks_and_no_textarea() {
        let view = render_view(&signup(), None);
        assert_eq!(view.matches("<div class=\"field\">").count(), 2);
        let email = view.find("<Label for=\"email\">").unwrap();
        let password = view.find("<Label for=\"password\">").unwrap();
        assert!(email < password);
        assert!(!view.contains(TEXTAREA_IMPORT));
        assert!(view.contains(INPUT_IMPORT));
        assert!(!view.contains("enctype"));
        assert!(view.contains("<title>Signup</title>"));
        assert!(view.contains("const { form: signupForm, errors, enhance, submitting }"));
    }

    #[test]
    fn signup_server_has_expected_rules() {
        let server = render_server(&signup());
        assert!(server.contains("const signupSchema = z.object({\n"));
        assert!(server.contains("\temail: z.string().email(),\n"));
        assert!(server.contains(
            "\tpassword: z.string().min(8, 'Password must be at least 8 characters'),\n"
        ));
        assert!(server.contains("return fail(400, { form });"));
        assert!(server.contains("const { email, password } = form.data;"));
        assert!(!server.contains("withFiles"));
    }

    #[test]
    fn imports_follow_rendered_widgets() {
        let only_textarea = Form::parse("note", &["body:textarea"]);
        let view = render_view(&only_textarea, None);
        assert!(view.contains(TEXTAREA_IMPORT));
        assert!(!view.contains(INPUT_IMPORT));

        let mixed = Form::parse("note", &["title", "body:textarea"]);
        let view = render_view(&mixed, None);
        assert!(view.contains(TEXTAREA_IMPORT));
        assert!(view.contains(INPUT_IMPORT));
    }

    #[test]
    fn multipart_only_for_multi_file_fields() {
        let single = render_view(&Form::parse("upload", &["avatar:file"]), None);
        assert!(!single.contains(MULTIPART_ATTR));
        assert!(single.contains("type=\"file\""));

        let multi = render_view(&Form::parse("upload", &["docs:files"]), None);
        let form_tag = "<form method=\"POST\" use:enhance enctype=\"multipart/form-data\">";
        assert!(multi.contains(form_tag));
    }

    #[test]
    fn file_fields_use_with_files_on_the_server() {
        let server = render_server(&Form::parse("upload", &["avatar:file", "docs:files"]));
        let import = "import { superValidate, withFiles } from 'sveltekit-superforms';";
        assert!(server.contains(import));
        assert!(server.contains("return fail(400, withFiles({ form }));"));
        assert!(server.contains("\tdocs: z.instanceof(File).array(),\n"));
    }

    #[test]
    fn schema_entries_match_field_count_and_order() {
        let form = Form::parse("profile", &["b:date", "a", "b:number", "c:files"]);
        let server = render_server(&form);
        let start = server.find("z.object({\n").unwrap() + "z.object({\n".len();
        let end = server.find("});").unwrap();
        let entries: Vec<&str> = server[start..end].lines().collect();
        assert_eq!(
            entries,
            [
                "\tb: z.date(),",
                "\ta: z.string(),",
                "\tb: z.number(),",
                "\tc: z.instanceof(File).array(),"
            ]
        );
        let view = render_view(&form, None);
        assert_eq!(view.matches("<div class=\"field\">").count(), 4);
    }

    #[test]
    fn title_includes_project_name_when_known() {
        let view = render_view(&signup(), Some("acme-site"));
        assert!(view.contains("<title>Signup | acme-site</title>"));
        assert!(view.contains("<h1>Signup</h1>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let form = Form::parse("contact", &["name", "message:textarea", "when:date"]);
        assert_eq!(render_form(&form, Some("x")), render_form(&form, Some("x")));
    }
}
