mod integration {
    mod common;
    mod menu;
}
