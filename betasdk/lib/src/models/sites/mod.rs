//! SharePoint sites and modern pages (`#microsoft.graph.site`,
//! `#microsoft.graph.sitePage` and the page canvas).

mod canvas;
mod enums;
mod server_processed_content;
mod site;
mod site_page;
mod web_part;

pub use canvas::{CanvasLayout, HorizontalSection, HorizontalSectionColumn, VerticalSection};
pub use enums::{
    HorizontalSectionLayoutType, PageLayoutType, PagePromotionType, SectionEmphasisType,
    TitleAreaLayoutType, TitleAreaTextAlignmentType,
};
pub use server_processed_content::{
    MetaDataKeyStringPair, MetaDataKeyValuePair, ServerProcessedContent,
};
pub use site::{Deleted, Root, Site, SiteCollection};
pub use site_page::{ContentTypeInfo, PublicationFacet, ReactionsFacet, SitePage, TitleArea};
pub use web_part::{AnyWebPart, StandardWebPart, TextWebPart, WebPart, WebPartData, WebPartPosition};
