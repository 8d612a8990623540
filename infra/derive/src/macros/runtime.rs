use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, ItemFn, ReturnType, Type};

/// Expands `#[emapi_runtime::main]`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    match expand(args, input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: TokenStream, input: ItemFn) -> syn::Result<TokenStream> {
    if input.sig.asyncness.is_none() {
        return Err(Error::new_spanned(
            &input.sig.ident,
            "#[emapi_runtime::main] can only be used on async functions",
        ));
    }
    if !returns_result(&input.sig.output) {
        return Err(Error::new_spanned(
            &input.sig.output,
            "#[emapi_runtime::main] requires a Result return type",
        ));
    }

    let preset = runtime_preset(args)?;
    let ItemFn { attrs, vis, sig, block } = input;
    let name = &sig.ident;
    let output = &sig.output;

    Ok(quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #preset;
            let rt = ::emapi_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    })
}

fn runtime_preset(args: TokenStream) -> syn::Result<TokenStream> {
    if args.is_empty() {
        return Ok(quote! { ::emapi_runtime::RuntimeConfig::default() });
    }

    let profile: syn::Ident = syn::parse2(args)?;
    match profile.to_string().as_str() {
        "high_performance" => Ok(quote! { ::emapi_runtime::RuntimeConfig::high_performance() }),
        "memory_efficient" => Ok(quote! { ::emapi_runtime::RuntimeConfig::memory_efficient() }),
        "default" => Ok(quote! { ::emapi_runtime::RuntimeConfig::default() }),
        _ => Err(Error::new_spanned(
            profile,
            "Unknown runtime profile. Use: high_performance, memory_efficient, or default",
        )),
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
