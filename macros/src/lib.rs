use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Returns true if the field holds a color channel, i.e. its type is spelled
/// `Component`.
fn is_channel(field: &syn::Field) -> bool {
    match &field.ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "Component")
            .unwrap_or(false),
        _ => false,
    }
}

/// Generate the boilerplate shared by every tristimulus and device model.
///
/// Fields of type `Component` are the color channels (3 or 4 of them) and are
/// made public. Any other field is a tag (reference white, RGB working space)
/// that is kept private and exposed through a getter, so that it can only be
/// set by the validating constructors written next to the model.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must be declared with named fields.")
        }
        .into();
    };

    let channel_count = named.named.iter().filter(|f| is_channel(f)).count();
    if !(3..=4).contains(&channel_count) {
        return quote! {
            compile_error!("Models must have 3 or 4 `Component` fields, one for each channel of the color.")
        }
        .into();
    }

    let mut channels: Vec<syn::Ident> = vec![];
    let mut tags: Vec<(syn::Ident, syn::Type, Vec<syn::Attribute>)> = vec![];

    for field in named.named.iter_mut() {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        if is_channel(field) {
            field.vis = syn::Visibility::Public(Default::default());
            channels.push(ident);
        } else {
            field.vis = syn::Visibility::Inherited;
            let docs = field
                .attrs
                .iter()
                .filter(|a| a.path().is_ident("doc"))
                .cloned()
                .collect();
            tags.push((ident, field.ty.clone(), docs));
        }
    }

    let attr = match syn::Attribute::parse_outer.parse2(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
    }) {
        Ok(attr) => attr,
        Err(err) => return err.to_compile_error().into(),
    };
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let getters = tags.iter().map(|(ident, ty, docs)| {
        quote! {
            #(#docs)*
            pub fn #ident(&self) -> #ty {
                self.#ident
            }
        }
    });

    let rest: proc_macro2::TokenStream = if tags.is_empty() {
        quote! {}
    } else {
        quote! { ..*self }
    };

    let model_impl = quote! {
        impl #struct_name {
            /// The number of channels in this model.
            pub const CHANNELS: usize = #channel_count;

            /// Return the channels of this color in declaration order.
            pub fn channels(&self) -> [crate::color::Component; #channel_count] {
                [#(self.#channels),*]
            }

            /// Return a copy of this color with its channels replaced. Tags
            /// are carried over unchanged.
            pub fn with_channels(&self, channels: [crate::color::Component; #channel_count]) -> Self {
                let [#(#channels),*] = channels;
                Self {
                    #(#channels,)*
                    #rest
                }
            }

            #(#getters)*
        }

        impl crate::color::HasSpace for #struct_name {
            const SPACE: crate::color::Space = crate::color::Space::#struct_name;
        }

        impl From<#struct_name> for crate::color::ColorValue {
            fn from(value: #struct_name) -> Self {
                Self::#struct_name(value)
            }
        }

        impl TryFrom<crate::color::ColorValue> for #struct_name {
            type Error = crate::error::Error;

            fn try_from(value: crate::color::ColorValue) -> ::core::result::Result<Self, Self::Error> {
                match value {
                    crate::color::ColorValue::#struct_name(model) => Ok(model),
                    other => Err(crate::error::Error::UnexpectedSpace {
                        expected: crate::color::Space::#struct_name,
                        found: other.space(),
                    }),
                }
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
