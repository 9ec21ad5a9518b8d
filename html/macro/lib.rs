use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::parse_macro_input;

enum Node {
	String(syn::LitStr),
	Block(syn::Block),
	Element(Element),
}

struct Element {
	pub name: syn::Ident,
	pub attributes: Vec<Attribute>,
	pub children: Vec<Node>,
	pub self_closing: bool,
}

struct Attribute {
	pub key: AttributeKey,
	pub value: AttributeValue,
}

type AttributeKey = syn::punctuated::Punctuated<syn::Ident, syn::Token![-]>;

enum AttributeValue {
	String(syn::LitStr),
	Block(syn::Block),
}

impl syn::parse::Parse for Node {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		if input.peek(syn::LitStr) {
			input.parse::<syn::LitStr>().map(Self::String)
		} else if input.peek(syn::token::Brace) {
			input.parse::<syn::Block>().map(Self::Block)
		} else if input.peek(syn::Token![<]) {
			input.parse::<Element>().map(Self::Element)
		} else {
			Err(syn::Error::new(input.span(), "failed to parse node"))
		}
	}
}

impl syn::parse::Parse for Element {
	fn parse(input: syn::parse::ParseStream) -> syn::parse::Result<Self> {
		input.parse::<syn::Token![<]>()?;
		let name = input.call(syn::Ident::parse_any)?;
		let mut attributes = Vec::new();
		while !(input.peek(syn::Token![>]) || input.peek(syn::Token![/])) {
			let key = AttributeKey::parse_separated_nonempty_with(input, syn::Ident::parse_any)?;
			input.parse::<syn::Token![=]>()?;
			let value = if input.peek(syn::LitStr) {
				input.parse::<syn::LitStr>().map(AttributeValue::String)?
			} else {
				input.parse::<syn::Block>().map(AttributeValue::Block)?
			};
			attributes.push(Attribute { key, value });
		}
		let self_closing = input.peek(syn::Token![/]);
		if self_closing {
			input.parse::<syn::Token![/]>()?;
		}
		input.parse::<syn::Token![>]>()?;
		let mut children = Vec::new();
		if !self_closing {
			while !(input.peek(syn::Token![<]) && input.peek2(syn::Token![/])) {
				let child = input.parse::<Node>()?;
				children.push(child);
			}
			input.parse::<syn::Token![<]>()?;
			input.parse::<syn::Token![/]>()?;
			let close_name = input.call(syn::Ident::parse_any)?;
			if close_name != name {
				return Err(syn::Error::new(
					close_name.span(),
					format!("expected closing tag for <{}>", name),
				));
			}
			input.parse::<syn::Token![>]>()?;
		}
		Ok(Self {
			name,
			attributes,
			children,
			self_closing,
		})
	}
}

impl quote::ToTokens for Node {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		match self {
			Self::String(string) => string.to_tokens(tokens),
			Self::Block(block) => block.to_tokens(tokens),
			Self::Element(element) => element.to_tokens(tokens),
		}
	}
}

impl quote::ToTokens for Element {
	fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
		let name = self.name.unraw().to_string();
		let attributes = self.attributes.iter().map(|attribute| {
			let key = attribute
				.key
				.iter()
				.map(|key| key.unraw().to_string())
				.collect::<Vec<_>>()
				.join("-");
			let value = match &attribute.value {
				AttributeValue::String(string) => quote! { #string.into() },
				AttributeValue::Block(block) => quote! { #block.into() },
			};
			quote! { (#key, #value) }
		});
		let children = self.children.iter();
		let self_closing = self.self_closing;
		let code = quote! {
			::html::Node::Host(::html::HostNode {
				name: #name,
				attributes: vec![#(#attributes),*],
				children: vec![#(#children.into()),*],
				self_closing: #self_closing,
			})
		};
		code.to_tokens(tokens);
	}
}

/// Builds an [`html::Node`] tree from html-like syntax. Attribute values and children are either string literals or `{expr}` blocks converted with `Into`.
#[proc_macro]
pub fn html(input: TokenStream) -> TokenStream {
	let ast = parse_macro_input!(input as Node);
	let ast = quote! { #ast };
	ast.into()
}
