use dioxus::prelude::*;

use common::catalog_api::FilterResourcesRequest;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::catalog_page::CatalogPage;
use crate::pages::chat_page::ChatPage;
use crate::pages::home_page::HomePage;
use crate::pages::network_page::NetworkPage;
use crate::pages::resource_page::ResourcePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/catalog/:query")]
    CatalogPage { query: UrlParam<FilterResourcesRequest> },


    #[route("/resource/:resource_id")]
    ResourcePage { resource_id: String },


    #[route("/chat")]
    ChatPage {},

    #[route("/network")]
    NetworkPage {},

}

impl Route {
    pub fn catalog_page_from_query(q: FilterResourcesRequest) -> Self {
        Self::CatalogPage { query: UrlParam::from(q) }
    }
}
