use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Defines the `tool!` macro for declaring tools.
/// Generates a `Tool` impl whose JSON Schema comes from `params`
/// and wires an async closure returning `Result<String, ToolError>` as the executor.
#[proc_macro]
pub fn tool(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ToolDefinition);

    let name = input.name;
    let description = input.description;
    let params_type = input.params_type;
    let execute_body = input.execute_body;

    let tool_struct = quote::format_ident!("{}", struct_name(&name.value()));

    let expanded = quote! {
        #[derive(Debug, Default, Clone, Copy)]
        pub struct #tool_struct;

        impl chat_tools::tools::Tool for #tool_struct {
            fn name(&self) -> &'static str {
                #name
            }

            fn description(&self) -> &'static str {
                #description
            }

            fn parameters_schema(&self) -> serde_json::Value {
                chat_tools::schemas::parameters_schema::<#params_type>()
            }

            fn execute(&self, parameters: serde_json::Value) -> chat_tools::tools::ToolFuture<'_> {
                Box::pin(async move {
                    let params: #params_type =
                        chat_tools::schemas::parse_arguments(#name, parameters)?;

                    let handler = #execute_body;
                    handler(params).await
                })
            }
        }
    };

    TokenStream::from(expanded)
}

/// `snake_case` and `camelCase` tool names both become PascalCase struct names.
fn struct_name(tool_name: &str) -> String {
    tool_name
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

struct ToolDefinition {
    name: syn::LitStr,
    description: syn::LitStr,
    params_type: syn::Type,
    execute_body: syn::ExprClosure,
}

fn parse_named_assignment<T: syn::parse::Parse>(
    input: syn::parse::ParseStream,
    keyword: &str,
) -> syn::Result<T> {
    let ident: syn::Ident = input.parse()?;
    if ident != keyword {
        return Err(syn::Error::new_spanned(
            ident,
            format!("expected '{keyword}'"),
        ));
    }
    input.parse::<syn::Token![=]>()?;
    let value = input.parse::<T>()?;
    input.parse::<syn::Token![,]>()?;
    Ok(value)
}

impl syn::parse::Parse for ToolDefinition {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let name = parse_named_assignment::<syn::LitStr>(input, "name")?;
        let description = parse_named_assignment::<syn::LitStr>(input, "description")?;
        let params_type = parse_named_assignment::<syn::Type>(input, "params")?;
        let execute_body: syn::ExprClosure = input.parse()?;

        Ok(ToolDefinition {
            name,
            description,
            params_type,
            execute_body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::struct_name;

    #[test]
    fn camel_case_names_keep_inner_capitals() {
        assert_eq!(struct_name("getCurrentDateTime"), "GetCurrentDateTime");
    }

    #[test]
    fn snake_case_names_become_pascal_case() {
        assert_eq!(struct_name("test_tool"), "TestTool");
    }
}
