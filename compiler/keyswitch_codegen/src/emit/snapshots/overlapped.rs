fn overlapped(s: &[char]) -> Option<u8> {
    let len = s.len();
    if len < 1 || len > 3 {
        return None;
    }
    match s[0] {
        'A' => {
            if len == 1 {
                return Some(0);
            }
            match s[1] {
                'A' => {
                    if len == 2 {
                        return Some(1);
                    }
                    match s[2] {
                        'A' => {
                            Some(2)
                        }
                        _ => None,
                    }
                }
                _ => None,
            }
        }
        _ => None,
    }
}
