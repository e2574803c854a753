use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;

    let name_str = name.to_string().to_uppercase();
    let id_name = format_ident!("__SIFT_COMPONENT_ID_OF_{}", name_str);

    let gen = quote! {
        sift_ecs::lazy_static! {
            static ref #id_name: sift_ecs::components::ComponentId =
                sift_ecs::components::next_component_id();
        }

        impl sift_ecs::components::Component for #name {
            #[inline(always)]
            fn component_id() -> sift_ecs::components::ComponentId {
                *#id_name
            }
        }
    };
    gen.into()
}
