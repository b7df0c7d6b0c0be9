use error_chain::error_chain;

error_chain! {
    errors {
        InvalidDimensions(width: usize, height: usize) {
            description("invalid grid dimensions")
            display("invalid grid dimensions {}x{}: width and height must both be at least 1",
                    width, height)
        }
    }
}
