fn alpha() {
    1
}

fn beta() {
    2
}
