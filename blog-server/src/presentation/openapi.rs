use utoipa::OpenApi;

use crate::presentation::app_error::ErrorBody;
use crate::presentation::handlers::categories::{CategoryDto, CategoryPageDto};
use crate::presentation::handlers::contact::{ContactDto, ContactFormDto, ContactResponseDto};
use crate::presentation::handlers::posts::{AuthorDto, PostCategoryDto, PostDto, PostPageDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::handlers::posts::list_posts,
        crate::presentation::handlers::posts::get_post,
        crate::presentation::handlers::categories::list_categories,
        crate::presentation::handlers::categories::category_posts,
        crate::presentation::handlers::contact::contact_form,
        crate::presentation::handlers::contact::submit_contact
    ),
    components(
        schemas(
            AuthorDto,
            PostCategoryDto,
            PostDto,
            PostPageDto,
            CategoryDto,
            CategoryPageDto,
            ContactDto,
            ContactFormDto,
            ContactResponseDto,
            ErrorBody
        )
    ),
    tags(
        (name = "posts", description = "Published posts"),
        (name = "categories", description = "Categories and their posts"),
        (name = "contact", description = "Contact form relay")
    )
)]
pub(crate) struct ApiDoc;
